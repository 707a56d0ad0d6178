use billed_domain::{active_icon, LayoutIcon};
use shared::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VerticalLayoutProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(VerticalLayout)]
pub fn vertical_layout(props: &VerticalLayoutProps) -> Html {
    let active = active_icon(props.route);

    let icon = |icon: LayoutIcon, target: Route, label: &'static str| {
        let class = if active == Some(icon) {
            classes!("layout-icon", "active-icon")
        } else {
            classes!("layout-icon")
        };
        let on_navigate = props.on_navigate.clone();
        html! {
            <div
                id={format!("layout-{}", icon.test_id())}
                data-testid={icon.test_id()}
                class={class}
                title={label}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(target))}
            >
                {label}
            </div>
        }
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="vertical-navbar">
            <div class="layout-title">{"Billed"}</div>
            {icon(LayoutIcon::Window, Route::Bills, "Mes notes de frais")}
            {icon(LayoutIcon::Mail, Route::NewBill, "Nouvelle note de frais")}
            <div id="layout-disconnect" data-testid="layout-disconnect" onclick={on_logout_click}>
                {"Se déconnecter"}
            </div>
        </div>
    }
}
