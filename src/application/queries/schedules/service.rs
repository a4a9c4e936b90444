use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::schedule::ScheduleRepository};

pub struct ScheduleQueryService {
    pub(super) repo: Arc<dyn ScheduleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ScheduleQueryService {
    pub fn new(repo: Arc<dyn ScheduleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
