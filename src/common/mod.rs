pub mod announcer;
pub mod duration;
pub mod eligibility;
pub mod options;
pub mod picker;
pub mod reply;
