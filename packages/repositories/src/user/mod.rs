use chrono::NaiveDateTime;
use data_access_objects::UserDao;
use models::users::{ActiveModel, Model};
use sea_orm::*;
use services::ProfileForm;

pub struct UserRepository;

impl UserRepository {
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        UserDao::count(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        username: String,
        email: String,
        password_hash: String,
        now: NaiveDateTime,
    ) -> Result<Model, DbErr> {
        let model = ActiveModel {
            username: ActiveValue::set(username),
            first_name: ActiveValue::set(String::new()),
            last_name: ActiveValue::set(String::new()),
            email: ActiveValue::set(email),
            password: ActiveValue::set(password_hash),
            created_at: ActiveValue::set(now),
            ..Default::default()
        };
        UserDao::insert(db, model).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        UserDao::find_by_id(db, id).await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        UserDao::find_by_username(db, username).await
    }

    /// Writes an already validated profile form.
    pub async fn update_profile(
        db: &DatabaseConnection,
        existing: Model,
        form: ProfileForm,
    ) -> Result<Model, DbErr> {
        let mut am = existing.into_active_model();
        am.username = ActiveValue::set(form.username.trim().to_string());
        am.first_name = ActiveValue::set(form.first_name.trim().to_string());
        am.last_name = ActiveValue::set(form.last_name.trim().to_string());
        am.email = ActiveValue::set(form.email.trim().to_string());
        UserDao::update(db, am).await
    }
}
