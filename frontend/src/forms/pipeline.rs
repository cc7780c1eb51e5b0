use std::cell::RefCell;
use std::rc::Rc;
use log::{debug, info, warn};
use serde_json::json;
use yew::Callback;

use crate::config::{FormConfig, FALLBACK_ERROR_MESSAGE};
use crate::forms::model::{BannerKind, FormModel};
use crate::forms::sender::{SendOperation, SubmissionResult};
use crate::services::analytics::AnalyticsSink;
use crate::services::live_region::LiveRegion;
use crate::services::timer::Timer;

/// Shared handle to a form model plus the hook that re-renders its view.
#[derive(Clone)]
pub struct FormHandle {
    model: Rc<RefCell<FormModel>>,
    on_change: Callback<()>,
}

impl FormHandle {
    pub fn new(model: FormModel, on_change: Callback<()>) -> Self {
        Self { model: Rc::new(RefCell::new(model)), on_change }
    }

    pub fn model(&self) -> &Rc<RefCell<FormModel>> {
        &self.model
    }

    /// Mutates the model and re-renders once.
    pub fn update<R>(&self, f: impl FnOnce(&mut FormModel) -> R) -> R {
        let out = {
            let mut model = self.model.borrow_mut();
            f(&mut *model)
        };
        self.on_change.emit(());
        out
    }
}

impl PartialEq for FormHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.model, &other.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    Rejected { first_invalid: String },
    Succeeded,
    Failed { message: String },
}

/// Validates, sends and reports one form submission at a time.
pub struct SubmitPipeline {
    sender: Rc<dyn SendOperation>,
    analytics: Option<Rc<dyn AnalyticsSink>>,
    timer: Rc<dyn Timer>,
    live_region: Option<LiveRegion>,
    config: FormConfig,
}

impl SubmitPipeline {
    pub fn new(
        sender: Rc<dyn SendOperation>,
        analytics: Option<Rc<dyn AnalyticsSink>>,
        timer: Rc<dyn Timer>,
        config: FormConfig,
    ) -> Self {
        Self { sender, analytics, timer, live_region: None, config }
    }

    pub fn with_live_region(mut self, live_region: LiveRegion) -> Self {
        self.live_region = Some(live_region);
        self
    }

    pub async fn submit(&self, form: &FormHandle) -> SubmitOutcome {
        // Re-entrancy gate; nothing below runs while a send is pending.
        if form.model.borrow().session().is_submitting() {
            debug!("submit ignored, {} already sending", self.config.form_id);
            return SubmitOutcome::Ignored;
        }

        let rejected = form.update(|model| {
            let first_invalid = model.validate_all()?;
            model.request_focus(&first_invalid);
            Some((first_invalid, model.session().error_count()))
        });
        if let Some((first_invalid, count)) = rejected {
            info!("{} rejected with {} invalid fields", self.config.form_id, count);
            self.announce(match count {
                1 => "Please correct the highlighted field.".to_string(),
                n => format!("Please correct the {} highlighted fields.", n),
            });
            return SubmitOutcome::Rejected { first_invalid };
        }

        let data = form.update(|model| {
            model.session_mut().begin_submit();
            model.set_submit_busy(self.config.busy_label.clone());
            model.collect()
        });

        // No borrow of the model may be held across this await.
        let result = self.sender.send(&data).await;

        let outcome = match result {
            Ok(SubmissionResult { success: true, message }) => {
                info!("{} sent", self.config.form_id);
                self.show_banner(form, BannerKind::Success, &message);
                form.update(|model| model.reset());
                self.track("form_submit_success", json!({ "form_id": self.config.form_id }));
                self.announce(message);
                SubmitOutcome::Succeeded
            }
            Ok(SubmissionResult { success: false, message }) => self.fail(form, message),
            Err(e) => {
                warn!("{} send error: {}", self.config.form_id, e);
                let message = e.user_message().unwrap_or(FALLBACK_ERROR_MESSAGE).to_string();
                self.fail(form, message)
            }
        };

        form.update(|model| {
            model.restore_submit(self.config.submit_label.clone());
            model.session_mut().finish_submit();
        });
        outcome
    }

    fn fail(&self, form: &FormHandle, message: String) -> SubmitOutcome {
        info!("{} submission failed: {}", self.config.form_id, message);
        self.show_banner(form, BannerKind::Error, &message);
        self.track(
            "form_submit_error",
            json!({ "form_id": self.config.form_id, "error": message }),
        );
        self.announce(message.clone());
        SubmitOutcome::Failed { message }
    }

    fn show_banner(&self, form: &FormHandle, kind: BannerKind, message: &str) {
        let id = form.update(|model| model.push_banner(kind, message));
        let form = form.clone();
        self.timer.schedule(
            self.config.banner_timeout,
            Box::new(move || form.update(|model| model.remove_banner(id))),
        );
    }

    fn track(&self, event: &str, params: serde_json::Value) {
        if let Some(sink) = &self.analytics {
            sink.track(event, &params);
        }
    }

    fn announce(&self, text: String) {
        if let Some(region) = &self.live_region {
            region.announce(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use pretty_assertions::assert_eq;

    use crate::forms::field::{FieldDescriptor, FieldKind};
    use crate::forms::sender::{
        FormData, MockSendOperation, MockSender, SendError, MISSING_FIELDS_MESSAGE,
    };
    use crate::services::analytics::recording::RecordingSink;
    use crate::services::timer::manual::ManualTimer;

    fn contact_model() -> FormModel {
        FormModel::new("contact-form", "Send message")
            .with_field(FieldDescriptor::new("name", FieldKind::Text).required(), "Name")
            .with_field(FieldDescriptor::new("email", FieldKind::Email).required(), "Email")
            .with_field(FieldDescriptor::new("phone", FieldKind::Tel), "Phone")
            .with_field(FieldDescriptor::new("message", FieldKind::Other).multiline().required().min_length(5), "Message")
    }

    fn filled(handle: &FormHandle) {
        handle.update(|m| {
            m.set_value("name", "Aiko Tanaka");
            m.set_value("email", "aiko@example.co");
            m.set_value("phone", "090-1234-5678");
            m.set_value("message", "Hello, I would like a demo.");
        });
    }

    struct Harness {
        timer: Rc<ManualTimer>,
        analytics: Rc<RecordingSink>,
        handle: FormHandle,
        renders: Rc<Cell<u32>>,
    }

    impl Harness {
        fn new(model: FormModel) -> Self {
            let renders = Rc::new(Cell::new(0));
            let r = renders.clone();
            Self {
                timer: Rc::new(ManualTimer::new()),
                analytics: Rc::new(RecordingSink::default()),
                handle: FormHandle::new(model, Callback::from(move |_| r.set(r.get() + 1))),
                renders,
            }
        }

        fn pipeline(&self, sender: Rc<dyn SendOperation>) -> SubmitPipeline {
            SubmitPipeline::new(
                sender,
                Some(self.analytics.clone() as Rc<dyn AnalyticsSink>),
                self.timer.clone(),
                FormConfig::default(),
            )
        }

        fn model(&self) -> std::cell::Ref<'_, FormModel> {
            self.handle.model().borrow()
        }
    }

    #[tokio::test]
    async fn invalid_field_blocks_send_and_takes_focus() {
        let h = Harness::new(contact_model());
        filled(&h.handle);
        h.handle.update(|m| m.set_value("email", "not-an-email"));

        let mut sender = MockSendOperation::new();
        sender.expect_send().never();
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: "email".to_string() });
        let model = h.model();
        assert_eq!(model.focus_request(), Some("email"));
        assert_eq!(model.error("email"), Some("Please enter a valid email address."));
        assert!(!model.session().is_submitting());
        assert!(model.banners().is_empty());
        assert!(h.analytics.events.borrow().is_empty());
    }

    #[tokio::test]
    async fn focus_goes_to_first_invalid_in_declaration_order() {
        let h = Harness::new(contact_model());
        h.handle.update(|m| m.set_value("message", "hey"));

        let mut sender = MockSendOperation::new();
        sender.expect_send().never();
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: "name".to_string() });
        assert_eq!(h.model().session().error_count(), 3);
    }

    #[tokio::test]
    async fn success_resets_form_and_banner_expires() {
        let h = Harness::new(contact_model());
        filled(&h.handle);

        let mut sender = MockSendOperation::new();
        sender
            .expect_send()
            .withf(|data: &FormData| data.get("email").map(String::as_str) == Some("aiko@example.co"))
            .times(1)
            .returning(|_| Ok(SubmissionResult::ok("Thanks!")));
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        {
            let model = h.model();
            assert!(model.fields().iter().all(|f| f.value.is_empty()));
            assert_eq!(model.session().error_count(), 0);
            assert_eq!(model.banners().len(), 1);
            assert_eq!(model.banners()[0].kind, BannerKind::Success);
            assert_eq!(model.submit_control().label, "Send message");
            assert!(!model.submit_control().disabled);
            assert!(!model.session().is_submitting());
        }
        assert_eq!(
            h.analytics.events.borrow().as_slice(),
            &[("form_submit_success".to_string(), json!({ "form_id": "contact-form" }))]
        );

        h.timer.advance(Duration::from_millis(4999));
        assert_eq!(h.model().banners().len(), 1);
        h.timer.advance(Duration::from_millis(1));
        assert!(h.model().banners().is_empty());
        assert!(h.renders.get() > 0);
    }

    #[tokio::test]
    async fn reported_failure_keeps_data_and_shows_error() {
        let h = Harness::new(contact_model());
        filled(&h.handle);

        let mut sender = MockSendOperation::new();
        sender.expect_send().returning(|_| Ok(SubmissionResult::failed("Mailbox full")));
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Failed { message: "Mailbox full".to_string() });
        {
            let model = h.model();
            assert_eq!(model.field("name").unwrap().value, "Aiko Tanaka");
            assert_eq!(model.banners()[0].kind, BannerKind::Error);
            assert_eq!(model.banners()[0].message, "Mailbox full");
            assert!(!model.submit_control().disabled);
            assert!(!model.session().is_submitting());
        }
        assert_eq!(
            h.analytics.events.borrow()[0],
            (
                "form_submit_error".to_string(),
                json!({ "form_id": "contact-form", "error": "Mailbox full" })
            )
        );
        h.timer.advance(Duration::from_secs(5));
        assert!(h.model().banners().is_empty());
    }

    #[tokio::test]
    async fn send_error_without_message_uses_fallback() {
        let h = Harness::new(contact_model());
        filled(&h.handle);

        let mut sender = MockSendOperation::new();
        sender.expect_send().returning(|_| Err(SendError::Unexpected(None)));
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Failed { message: FALLBACK_ERROR_MESSAGE.to_string() });
        assert!(!h.model().session().is_submitting());
    }

    #[tokio::test]
    async fn send_error_message_is_surfaced() {
        let h = Harness::new(contact_model());
        filled(&h.handle);

        let mut sender = MockSendOperation::new();
        sender.expect_send().returning(|_| Err(SendError::Backend("Service unavailable".into())));
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Failed { message: "Service unavailable".to_string() });
    }

    #[tokio::test]
    async fn mock_sender_rejects_form_without_message_key() {
        // Every declared field passes, but the form has no "message" control.
        let model = FormModel::new("newsletter", "Send")
            .with_field(FieldDescriptor::new("name", FieldKind::Text).required(), "Name")
            .with_field(FieldDescriptor::new("email", FieldKind::Email).required(), "Email");
        let h = Harness::new(model);
        h.handle.update(|m| {
            m.set_value("name", "Aiko");
            m.set_value("email", "aiko@example.co");
        });

        let sender = MockSender::new(h.timer.clone(), Duration::from_millis(1500));
        let outcome = h.pipeline(Rc::new(sender)).submit(&h.handle).await;

        assert_eq!(outcome, SubmitOutcome::Failed { message: MISSING_FIELDS_MESSAGE.to_string() });
        assert_eq!(h.model().session().error_count(), 0);
        assert_eq!(h.timer.slept(), vec![Duration::from_millis(1500)]);
    }

    #[tokio::test]
    async fn missing_analytics_sink_is_harmless() {
        let h = Harness::new(contact_model());
        filled(&h.handle);
        let mut sender = MockSendOperation::new();
        sender.expect_send().returning(|_| Ok(SubmissionResult::ok("ok")));
        let pipeline = SubmitPipeline::new(Rc::new(sender), None, h.timer.clone(), FormConfig::default());

        assert_eq!(pipeline.submit(&h.handle).await, SubmitOutcome::Succeeded);
    }

    #[tokio::test]
    async fn outcome_is_announced() {
        let h = Harness::new(contact_model());
        filled(&h.handle);
        let region = LiveRegion::new(h.timer.clone(), Duration::from_secs(1));
        let mut sender = MockSendOperation::new();
        sender.expect_send().returning(|_| Ok(SubmissionResult::ok("Thanks!")));
        let pipeline = h.pipeline(Rc::new(sender)).with_live_region(region.clone());

        pipeline.submit(&h.handle).await;
        assert_eq!(region.current().as_deref(), Some("Thanks!"));
    }

    /// Holds every send until the test opens the gate.
    struct GatedSender {
        gate: RefCell<Option<oneshot::Receiver<SubmissionResult>>>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl SendOperation for GatedSender {
        async fn send(&self, _data: &FormData) -> Result<SubmissionResult, SendError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.map_err(|_| SendError::Unexpected(None)),
                None => Err(SendError::Backend("second send".into())),
            }
        }
    }

    #[tokio::test]
    async fn submit_while_sending_is_a_no_op() {
        let h = Harness::new(contact_model());
        filled(&h.handle);
        let (tx, rx) = oneshot::channel();
        let sender = Rc::new(GatedSender { gate: RefCell::new(Some(rx)), calls: Cell::new(0) });
        let pipeline = h.pipeline(sender.clone());

        let mut first = Box::pin(pipeline.submit(&h.handle));
        assert!((&mut first).now_or_never().is_none());
        {
            let model = h.model();
            assert!(model.session().is_submitting());
            assert!(model.submit_control().disabled);
            assert_eq!(model.submit_control().label, "Sending...");
        }

        assert_eq!(pipeline.submit(&h.handle).await, SubmitOutcome::Ignored);
        assert_eq!(sender.calls.get(), 1);

        tx.send(SubmissionResult::ok("Thanks!")).unwrap();
        assert_eq!(first.await, SubmitOutcome::Succeeded);
        assert_eq!(sender.calls.get(), 1);
        assert_eq!(h.model().banners().len(), 1);
        assert!(!h.model().session().is_submitting());
    }
}
