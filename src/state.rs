use crate::api::CoachApi;
use crate::source::PlanDayCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: CoachApi,
    pub plan_days: Arc<PlanDayCache>,
}

impl AppState {
    pub fn new(api: CoachApi) -> Self {
        Self {
            api,
            plan_days: Arc::new(PlanDayCache::default()),
        }
    }
}
