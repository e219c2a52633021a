//! User Records

use crate::ids::TypedId;

pub type UserId = TypedId<UserRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
