use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
}

#[derive(new)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub email: Option<String>,
}

#[derive(new)]
pub struct DeleteUser {
    pub user_id: UserId,
}
