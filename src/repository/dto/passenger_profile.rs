use crate::repository::entity::PassengerProfileFindEntity;

///
/// Display information about a passenger, maintained outside of
/// this service. Read-only here; absence is not an error.
///
#[derive(Clone, Debug)]
pub struct PassengerProfile {
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
}

impl From<PassengerProfileFindEntity> for PassengerProfile {
    fn from(value: PassengerProfileFindEntity) -> Self {
        Self {
            name: value.name,
            company: value.company,
            position: value.position,
        }
    }
}
