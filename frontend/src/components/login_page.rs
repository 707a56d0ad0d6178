use billed_domain::Navigator;
use shared::{Route, User};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::app_context::AppContext;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub context: AppContext,
    /// Emitted after the session was written
    pub on_login: Callback<()>,
}

/// Employee sign-in. Only records who is using the app; nothing is checked.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error_message.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let error_message = error_message.clone();
        let context = props.context.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let address = email.trim().to_string();
            if address.is_empty() {
                error_message.set(Some("Veuillez saisir votre adresse e-mail".to_string()));
                return;
            }

            match context.session.sign_in(&User::employee(&address)) {
                Ok(()) => {
                    on_login.emit(());
                    context.navigator.navigate(Route::Bills);
                }
                Err(e) => {
                    log::error!("{}", e);
                    error_message.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="login-page">
            <h1>{"Billed"}</h1>
            <form data-testid="form-employee" class="login-form" onsubmit={on_submit}>
                <h2>{"Employé"}</h2>
                {if let Some(error) = error_message.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}
                <div class="form-group">
                    <label for="employee-email-input">{"Votre email"}</label>
                    <input
                        type="email"
                        id="employee-email-input"
                        data-testid="employee-email-input"
                        placeholder="johndoe@email.com"
                        value={(*email).clone()}
                        onchange={on_email_change}
                    />
                </div>
                <button type="submit" class="btn btn-primary" data-testid="employee-login-button">
                    {"Se connecter"}
                </button>
            </form>
        </div>
    }
}
