use std::rc::Rc;
use log::info;

use crate::config::FormConfig;
use crate::forms::pipeline::SubmitPipeline;
use crate::forms::sender::MockSender;
use crate::services::analytics::{AnalyticsSink, GtagSink, LogSink};
use crate::services::live_region::LiveRegion;
use crate::services::timer::{BrowserTimer, Timer};

/// Collaborators shared by every component, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub pipeline: Rc<SubmitPipeline>,
    pub live_region: LiveRegion,
    pub config: FormConfig,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pipeline, &other.pipeline) && self.live_region == other.live_region
    }
}

fn detect_analytics() -> Option<Rc<dyn AnalyticsSink>> {
    if let Some(gtag) = GtagSink::detect() {
        info!("gtag found, analytics enabled");
        return Some(Rc::new(gtag));
    }
    if cfg!(debug_assertions) {
        return Some(Rc::new(LogSink));
    }
    None
}

pub fn build_app_context() -> AppContext {
    let config = FormConfig::default();
    let timer: Rc<dyn Timer> = Rc::new(BrowserTimer);
    let live_region = LiveRegion::new(timer.clone(), config.announcement_clear);
    let sender = Rc::new(MockSender::new(timer.clone(), config.send_delay));

    let pipeline = SubmitPipeline::new(sender, detect_analytics(), timer, config.clone())
        .with_live_region(live_region.clone());

    AppContext {
        pipeline: Rc::new(pipeline),
        live_region,
        config,
    }
}
