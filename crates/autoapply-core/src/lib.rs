pub mod collab;
pub mod driver;
pub mod model;
pub mod site;

pub use collab::{EntityRecognizer, Generator, TextExtractor};
pub use driver::{Driver, DriverError, ElementHandle, Selector};
pub use model::{
    AnswerResolution, AnswerSource, ApplicantProfile, ApplicationOutcome, ApplicationStatus,
    ApplyStage, FormField, JobListing, StageFailure,
};
pub use site::SiteAdapter;
