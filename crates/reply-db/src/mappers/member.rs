//! Member entity <-> model mapper

use reply_core::entities::Member;
use reply_core::value_objects::Snowflake;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: Snowflake::new(model.id),
            nickname: model.nickname,
            created_at: model.created_at,
        }
    }
}
