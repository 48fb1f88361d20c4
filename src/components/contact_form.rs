use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Shape check only: non-empty local part and domain, no whitespace, and the
/// domain must carry a label after its last dot.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

/// Indian mobile number: exactly 10 digits starting with 6-9, after
/// stripping whitespace.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(digits.chars().next(), Some('6'..='9'))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_value = (*name).trim().to_string();
            let email_value = (*email).trim().to_string();
            let phone_value = (*phone).clone();

            if name_value.is_empty() || email_value.is_empty() || phone_value.trim().is_empty() {
                error_setter.set(Some(
                    "Please fill in your name, email and phone number.".to_string(),
                ));
                success_setter.set(None);
                return;
            }
            if !is_valid_email(&email_value) {
                error_setter.set(Some("Please enter a valid email address.".to_string()));
                success_setter.set(None);
                return;
            }
            if !is_valid_phone(&phone_value) {
                error_setter.set(Some(
                    "Please enter a valid 10-digit mobile number.".to_string(),
                ));
                success_setter.set(None);
                return;
            }

            log::info!("Contact form validated for {}", name_value);
            error_setter.set(None);
            success_setter.set(Some("Thank you! We will contact you soon.".to_string()));
            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            message.set(String::new());
        })
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! {
                        <div class="form-message error-message">
                            {error_message}
                        </div>
                    }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! {
                        <div class="form-message success-message">
                            {success_message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                value={(*name).clone()}
                oninput={let name = name.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                name="email"
                placeholder="Email Address"
                value={(*email).clone()}
                oninput={let email = email.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <input
                type="tel"
                name="phone"
                placeholder="Mobile Number"
                value={(*phone).clone()}
                oninput={let phone = phone.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    phone.set(input.value());
                }}
            />
            <textarea
                name="message"
                placeholder="How can we help you?"
                rows="4"
                value={(*message).clone()}
                oninput={let message = message.clone(); move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            ></textarea>
            <button type="submit">{"Send Message"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_phone};

    #[test]
    fn email_without_top_level_domain_is_rejected() {
        assert!(!is_valid_email("jo@example"));
    }

    #[test]
    fn well_formed_email_is_accepted() {
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn malformed_email_variants_are_rejected() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jo@"));
        assert!(!is_valid_email("jo@.com"));
        assert!(!is_valid_email("jo example@mail.com"));
        assert!(!is_valid_email("jo@ex@ample.com"));
    }

    #[test]
    fn ten_digit_mobile_starting_six_to_nine_is_accepted() {
        assert!(is_valid_phone("9123456789"));
        assert!(is_valid_phone("6000000000"));
        assert!(is_valid_phone("91234 56789"));
    }

    #[test]
    fn other_phone_shapes_are_rejected() {
        assert!(!is_valid_phone("5123456789"));
        assert!(!is_valid_phone("912345678"));
        assert!(!is_valid_phone("91234567890"));
        assert!(!is_valid_phone("+919123456789"));
        assert!(!is_valid_phone("91234a6789"));
        assert!(!is_valid_phone(""));
    }
}
