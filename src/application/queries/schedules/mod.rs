mod get_by_edit_token;
mod get_by_id;
mod service;

pub use get_by_edit_token::GetScheduleByEditTokenQuery;
pub use get_by_id::GetScheduleQuery;
pub use service::ScheduleQueryService;
