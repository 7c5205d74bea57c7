//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod batch_repo;
pub mod booking_repo;
pub mod facility_issue_repo;
pub mod lecturer_repo;
pub mod module_overview_repo;
pub mod room_repo;
pub mod setting_repo;
pub mod subject_repo;

pub use activity_repo::ActivityRepo;
pub use batch_repo::BatchRepo;
pub use booking_repo::{BookingRepo, BookingWrite};
pub use facility_issue_repo::FacilityIssueRepo;
pub use lecturer_repo::LecturerRepo;
pub use module_overview_repo::ModuleOverviewRepo;
pub use room_repo::RoomRepo;
pub use setting_repo::SettingRepo;
pub use subject_repo::SubjectRepo;
