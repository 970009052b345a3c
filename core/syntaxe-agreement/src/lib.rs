pub mod systems;

pub use systems::internal::check_internal_agreement;
pub use systems::subject_verb::check_subject_verb;
