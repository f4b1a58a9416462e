use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use jurnal_engine::Record;
use jurnal_types::{
    EntityKind, Envelope, Jadwal, JadwalDraft, Jurnal, JurnalDraft, Kelas, KelasDraft, LoginData, Mapel,
    MapelDraft, Role, Siswa, SiswaDraft, User, UserDraft,
};

use crate::gateway::{Endpoints, Gateway, LOGIN, LOGOUT, Request};
use crate::session::Session;
use crate::{Error, Result};

/// A record the gateway can list, fetch and mutate.
pub trait Resource: Record + DeserializeOwned + Send + Sync + 'static {
    /// Request body for create and update.
    type Draft: Serialize + Send + Sync;
}

impl Resource for User {
    type Draft = UserDraft;
}

impl Resource for Kelas {
    type Draft = KelasDraft;
}

impl Resource for Mapel {
    type Draft = MapelDraft;
}

impl Resource for Siswa {
    type Draft = SiswaDraft;
}

impl Resource for Jadwal {
    type Draft = JadwalDraft;
}

impl Resource for Jurnal {
    type Draft = JurnalDraft;
}

/// Which slice of an entity's records to request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    /// Users with one role.
    Role(Role),
    /// Journals or schedules of one teacher.
    Teacher(String),
}

/// Typed access to the gateway on behalf of one session.
#[derive(Clone)]
pub struct Client {
    gateway: Arc<dyn Gateway>,
    session: Session,
}

impl Client {
    pub fn new(gateway: Arc<dyn Gateway>, session: Session) -> Self {
        Self { gateway, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    async fn fetch(&self, path: String) -> Result<Value> {
        let request = Request::get(path).with_token(self.session.token());
        self.gateway.send(request).await
    }

    /// Credentials are checked before the request is built.
    async fn mutate(&self, request: Request) -> Result<Value> {
        let token = self.session.require_token()?;
        self.gateway.send(request.with_token(Some(token))).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<&User> {
        let body = json!({ "username": username, "password": password });
        let value = self.gateway.send(Request::post(LOGIN, body)).await?;
        let login: Envelope<LoginData> = decode(value)?;
        let data = login
            .into_data()?
            .ok_or_else(|| Error::Decode("login response carried no token".to_string()))?;

        tracing::info!(user = %data.user.id, role = ?data.user.role, "signed in");
        self.session.sign_in(data);
        self.session
            .user()
            .ok_or_else(|| Error::Decode("login response carried no user".to_string()))
    }

    /// Tells the server the token is done, then forgets it locally even if
    /// the server could not be reached.
    pub async fn logout(&mut self) -> Result<()> {
        let outcome = match self.session.token() {
            Some(_) => self.mutate(Request::post(LOGOUT, json!({}))).await.map(drop),
            None => Ok(()),
        };
        self.session.sign_out();
        tracing::info!("signed out");
        outcome
    }

    pub async fn list<T: Resource>(&self) -> Result<Vec<T>> {
        let value = self.fetch(Endpoints::list(T::KIND).to_string()).await?;
        list_of(value)
    }

    pub async fn list_in<T: Resource>(&self, scope: &Scope) -> Result<Vec<T>> {
        let path = match (scope, T::KIND) {
            (Scope::All, kind) => Endpoints::list(kind).to_string(),
            (Scope::Role(role), EntityKind::User) => Endpoints::users_with_role(&role.to_string()),
            (Scope::Teacher(id), EntityKind::Jurnal) => Endpoints::jurnal_by_guru(id),
            (Scope::Teacher(id), EntityKind::Jadwal) => Endpoints::jadwal_by_guru(id),
            (scope, kind) => {
                return Err(Error::UnsupportedScope(format!(
                    "{} cannot be listed by {:?}",
                    kind, scope
                )));
            }
        };
        list_of(self.fetch(path).await?)
    }

    pub async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>> {
        match role {
            Some(role) => list_of(self.fetch(Endpoints::users_with_role(&role.to_string())).await?),
            None => self.list::<User>().await,
        }
    }

    /// Detail fetch; a 404 or an empty payload is [`Error::NotFound`].
    pub async fn get<T: Resource>(&self, id: &str) -> Result<T> {
        let what = format!("{} {}", T::KIND, id);
        let value = match self.fetch(Endpoints::detail(T::KIND, id)).await {
            Err(Error::Gateway {
                status: Some(404),
                message,
            }) => {
                return Err(Error::NotFound(match message {
                    Some(reason) => format!("{} ({})", what, reason),
                    None => what,
                }));
            }
            other => other?,
        };
        record_of::<T>(value)?.ok_or(Error::NotFound(what))
    }

    /// Class detail with its students expanded.
    pub async fn kelas_with_siswa(&self, id: &str) -> Result<Kelas> {
        self.get::<Kelas>(id).await
    }

    pub async fn jurnal_by_guru(&self, user_id: &str) -> Result<Vec<Jurnal>> {
        self.list_in(&Scope::Teacher(user_id.to_string())).await
    }

    pub async fn jadwal_by_guru(&self, user_id: &str) -> Result<Vec<Jadwal>> {
        self.list_in(&Scope::Teacher(user_id.to_string())).await
    }

    /// Returns the server's canonical record, or `None` when the response
    /// acknowledged the write without one.
    pub async fn create<T: Resource>(&self, draft: &T::Draft) -> Result<Option<T>> {
        let body = serde_json::to_value(draft)?;
        let value = self.mutate(Request::post(Endpoints::create(T::KIND), body)).await?;
        record_of(value)
    }

    pub async fn update<T: Resource>(&self, id: &str, draft: &T::Draft) -> Result<Option<T>> {
        let body = serde_json::to_value(draft)?;
        let value = self
            .mutate(Request::put(Endpoints::update(T::KIND, id), body))
            .await?;
        record_of(value)
    }

    pub async fn delete<T: Resource>(&self, id: &str) -> Result<()> {
        let value = self.mutate(Request::delete(Endpoints::delete(T::KIND, id))).await?;
        acknowledged(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

fn list_of<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    let envelope: Envelope<Vec<T>> = decode(value)?;
    Ok(envelope.into_list()?)
}

fn record_of<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    let envelope: Envelope<Value> = decode(value)?;
    match envelope.into_data()? {
        Some(Value::Null) | None => Ok(None),
        Some(data) => Ok(Some(decode(data)?)),
    }
}

/// A write with no useful payload; only `success: false` is a failure.
fn acknowledged(value: Value) -> Result<()> {
    if value.is_object() {
        let envelope: Envelope<Value> = decode(value)?;
        envelope.into_data()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_of_missing_data_is_none() -> Result<()> {
        assert!(record_of::<Mapel>(json!({"success": true}))?.is_none());
        assert!(record_of::<Mapel>(json!({"success": true, "data": null}))?.is_none());
        assert!(record_of::<Mapel>(Value::Null)?.is_none());
        Ok(())
    }

    #[test]
    fn test_record_of_decodes_payload() -> Result<()> {
        let mapel: Option<Mapel> = record_of(json!({
            "success": true,
            "data": {"_id": "m1", "namaMapel": "IPA"}
        }))?;
        assert_eq!(mapel.map(|m| m.id), Some("m1".to_string()));
        Ok(())
    }

    #[test]
    fn test_acknowledged_rejects_failed_envelope() {
        let err = acknowledged(json!({"success": false, "message": "Masih dipakai jadwal"}))
            .unwrap_err();
        assert_eq!(err.user_message(), "Masih dipakai jadwal");
        assert!(acknowledged(json!({"success": true})).is_ok());
        assert!(acknowledged(Value::Null).is_ok());
    }
}
