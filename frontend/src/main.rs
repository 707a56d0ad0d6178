mod components;
mod hooks;
mod services;

use billed_domain::{resolve_route, Navigator};
use gloo::events::EventListener;
use shared::Route;
use yew::prelude::*;

use components::{BillsPage, LoginPage, NewBillPage};
use services::app_context::AppContext;
use services::config::AppConfig;
use services::logging::Logger;
use services::navigation::current_location_route;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let route = use_state(current_location_route);
    // Bumped on login/logout so the session is read again
    let session_revision = use_state(|| 0u32);
    // Bumped when a bill was created so the bills list refetches
    let bills_revision = use_state(|| 0u32);

    let context = use_memo((), {
        let config = config.clone();
        let route = route.clone();
        move |_| {
            let initial = *route;
            AppContext::new(&config, initial, Callback::from(move |next: Route| route.set(next)))
        }
    });

    // Back/forward buttons and manual hash edits
    use_effect_with((), {
        let navigator = context.navigator.clone();
        move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
                let next = current_location_route();
                if navigator.current_route() != Some(next) {
                    navigator.sync(next);
                }
            });
            move || drop(listener)
        }
    });

    let on_navigate = {
        let navigator = context.navigator.clone();
        Callback::from(move |next: Route| navigator.navigate(next))
    };

    let on_logout = {
        let context = context.clone();
        let session_revision = session_revision.clone();
        Callback::from(move |_| {
            context.session.logout(context.navigator.as_ref());
            session_revision.set(*session_revision + 1);
        })
    };

    let on_login = {
        let session_revision = session_revision.clone();
        Callback::from(move |_| session_revision.set(*session_revision + 1))
    };

    let on_bill_created = {
        let bills_revision = bills_revision.clone();
        Callback::from(move |_| bills_revision.set(*bills_revision + 1))
    };

    let user = context.session.current_user().ok();

    match resolve_route(*route, user.as_ref()) {
        Route::Login => html! {
            <LoginPage context={(*context).clone()} on_login={on_login} />
        },
        Route::Bills => html! {
            <BillsPage
                context={(*context).clone()}
                bills_revision={*bills_revision}
                on_navigate={on_navigate}
                on_logout={on_logout}
            />
        },
        Route::NewBill => html! {
            <NewBillPage
                context={(*context).clone()}
                on_navigate={on_navigate}
                on_logout={on_logout}
                on_bill_created={on_bill_created}
            />
        },
        Route::Dashboard => html! {
            <div class="dashboard-placeholder">
                <p>{"Le tableau de bord administrateur n'est pas disponible."}</p>
            </div>
        },
    }
}

fn main() {
    Logger::init(AppConfig::from_env().log_level);
    yew::Renderer::<App>::new().render();
}
