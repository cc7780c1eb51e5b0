use std::rc::Rc;
use log::{debug, warn};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::banner::BannerStack;
use crate::components::char_counter::CharacterCounter;
use crate::components::password_strength::PasswordStrengthMeter;
use crate::config::FormConfig;
use crate::context::AppContext;
use crate::forms::field::{FieldDescriptor, FieldKind};
use crate::forms::model::{Field, FormModel};
use crate::forms::pipeline::{FormHandle, SubmitOutcome, SubmitPipeline};

/// The fields of the contact form, described by the attributes they render with.
pub fn contact_form_model(config: &FormConfig) -> FormModel {
    FormModel::new(config.form_id.clone(), config.submit_label.clone())
        .with_field(FieldDescriptor::from_attributes("name", "text", true, Some("80"), None), "Name")
        .with_field(FieldDescriptor::from_attributes("email", "email", true, None, None), "Email")
        .with_field(FieldDescriptor::from_attributes("phone", "tel", false, Some("20"), None), "Phone")
        .with_field(FieldDescriptor::from_attributes("website", "url", false, None, None), "Company website")
        .with_field(
            FieldDescriptor::from_attributes("message", "textarea", true, Some("1000"), Some("10")),
            "Message",
        )
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub app: AppContext,
}

pub enum ContactFormMsg {
    Input(String, String),
    Blur(String),
    Submit,
    Submitted(SubmitOutcome),
    Refresh,
}

pub struct ContactForm {
    form: FormHandle,
    pipeline: Rc<SubmitPipeline>,
    warning_ratio: f64,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let app = &ctx.props().app;
        Self {
            form: FormHandle::new(
                contact_form_model(&app.config),
                ctx.link().callback(|_| ContactFormMsg::Refresh),
            ),
            pipeline: app.pipeline.clone(),
            warning_ratio: app.config.counter_warning_ratio,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(name, value) => {
                self.form.model().borrow_mut().set_value(&name, value);
                true
            }
            ContactFormMsg::Blur(name) => {
                self.form.model().borrow_mut().validate_field(&name);
                true
            }
            ContactFormMsg::Submit => {
                let pipeline = self.pipeline.clone();
                let form = self.form.clone();
                ctx.link().send_future(async move {
                    ContactFormMsg::Submitted(pipeline.submit(&form).await)
                });
                false
            }
            ContactFormMsg::Submitted(outcome) => {
                debug!("contact form submit finished: {:?}", outcome);
                true
            }
            ContactFormMsg::Refresh => true,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let request = self.form.model().borrow_mut().take_focus_request();
        let Some(name) = request else {
            return;
        };
        let node = self.form.model().borrow().field(&name).map(|f| f.node.clone());
        match node.and_then(|node| node.cast::<HtmlElement>()) {
            Some(element) => {
                element.scroll_into_view();
                if let Err(e) = element.focus() {
                    warn!("Could not focus {}: {:?}", name, e);
                }
            }
            None => warn!("No element rendered for field {}", name),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let model = self.form.model().borrow();
        let submit = model.submit_control().clone();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <form id={model.form_id.clone()} class="contact-form" novalidate={true} {onsubmit}>
                <BannerStack banners={model.banners().to_vec()} />
                { for model.fields().iter().map(|field| self.render_field(ctx, field, model.error(field.name()))) }
                <button type="submit" class="contact-submit" disabled={submit.disabled} aria-busy={submit.disabled.to_string()}>
                    {submit.label}
                </button>
            </form>
        }
    }
}

impl ContactForm {
    fn render_field(&self, ctx: &Context<Self>, field: &Field, error: Option<&str>) -> Html {
        let desc = &field.descriptor;
        let input_id = format!("{}-input", field.error_id.trim_end_matches("-error"));
        let maxlength = desc.max_length.map(|m| m.to_string());
        let minlength = desc.min_length.map(|m| m.to_string());
        let invalid = error.is_some();

        let onblur = {
            let name = desc.name.clone();
            ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(name.clone()))
        };

        let control = if desc.is_multiline() {
            let name = desc.name.clone();
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                ContactFormMsg::Input(name.clone(), input.value())
            });
            html! {
                <textarea
                    id={input_id.clone()}
                    name={desc.name.clone()}
                    ref={field.node.clone()}
                    value={field.value.clone()}
                    required={desc.required}
                    maxlength={maxlength}
                    data-min-length={minlength}
                    aria-invalid={invalid.to_string()}
                    aria-describedby={field.error_id.clone()}
                    rows="6"
                    {oninput}
                    {onblur}
                />
            }
        } else {
            let name = desc.name.clone();
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactFormMsg::Input(name.clone(), input.value())
            });
            html! {
                <input
                    id={input_id.clone()}
                    type={desc.input_type.clone()}
                    name={desc.name.clone()}
                    ref={field.node.clone()}
                    value={field.value.clone()}
                    required={desc.required}
                    maxlength={maxlength}
                    data-min-length={minlength}
                    aria-invalid={invalid.to_string()}
                    aria-describedby={field.error_id.clone()}
                    {oninput}
                    {onblur}
                />
            }
        };

        html! {
            <div class={classes!("form-group", invalid.then(|| "has-error"))}>
                <label for={input_id}>
                    {&field.label}
                    if desc.required {
                        <span class="required-mark" aria-hidden="true">{" *"}</span>
                    }
                </label>
                {control}
                if let Some(max) = desc.max_length {
                    <CharacterCounter value={field.value.clone()} {max} warning_ratio={self.warning_ratio} />
                }
                if desc.kind == FieldKind::Password {
                    <PasswordStrengthMeter value={field.value.clone()} />
                }
                <div id={field.error_id.clone()} class="field-error" role="alert">
                    {error.unwrap_or_default()}
                </div>
            </div>
        }
    }
}
