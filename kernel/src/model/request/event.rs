use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct CreateRequest {
    pub requestor_id: UserId,
    pub description: String,
}
