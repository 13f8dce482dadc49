//! Wire Models
//!
//! Data structures matching the backend's JSON. The backend uses Spanish
//! field names; they are mapped onto English fields with serde renames.

use serde::{Deserialize, Serialize};

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned id, unknown until the backend reports it
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    #[serde(rename = "imagen_perfil", default)]
    pub profile_image: Option<String>,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// Task progress. The backend only accepts these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Sin Empezar")]
    NotStarted,
    #[serde(rename = "Empezada")]
    Started,
    #[serde(rename = "Finalizada")]
    Finished,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::NotStarted, TaskStatus::Started, TaskStatus::Finished];

    /// Wire value, also used as the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Sin Empezar",
            TaskStatus::Started => "Empezada",
            TaskStatus::Finished => "Finalizada",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        TaskStatus::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "status-pending",
            TaskStatus::Started => "status-in-progress",
            TaskStatus::Finished => "status-completed",
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "fecha_tentiva_finalizacion", default)]
    pub due_at: Option<String>,
    #[serde(rename = "estado")]
    pub status: TaskStatus,
    /// Optional on read: a status change nulls it server-side
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,
    pub user_id: u32,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    #[serde(rename = "contrasenia")]
    pub password: String,
    #[serde(rename = "imagen_perfil")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "estado")]
    pub status: TaskStatus,
    pub category_id: u32,
    #[serde(rename = "fecha_tentiva_finalizacion")]
    pub due_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// Full-resource task update (`PUT /tasks/{id}`)
///
/// Every field is sent, `None` included, so the server overwrites
/// whatever was stored before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(rename = "estado")]
    pub status: TaskStatus,
    #[serde(rename = "fecha_tentiva_finalizacion")]
    pub due_at: Option<String>,
    pub category_id: Option<u32>,
}

impl TaskUpdate {
    /// Status change as the board issues it.
    ///
    /// FIXME: this wipes the task's due date and category on the server.
    /// Needs a partial-update endpoint before it can carry them through.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status,
            due_at: None,
            category_id: None,
        }
    }
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_value(TaskStatus::NotStarted).unwrap(), json!("Sin Empezar"));
        assert_eq!(serde_json::to_value(TaskStatus::Started).unwrap(), json!("Empezada"));
        assert_eq!(serde_json::to_value(TaskStatus::Finished).unwrap(), json!("Finalizada"));
        assert_eq!(TaskStatus::from_value("Empezada"), Some(TaskStatus::Started));
        assert_eq!(TaskStatus::from_value("Done"), None);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let body = json!({
            "id": 1,
            "texto": "Comprar pan",
            "estado": "Pausada",
            "category_id": 2,
            "fecha_creacion": "2024-05-01T10:00:00",
            "user_id": 9
        });
        assert!(serde_json::from_value::<Task>(body).is_err());
    }

    #[test]
    fn test_task_from_backend_json() {
        let body = json!({
            "id": 4,
            "texto": "Escribir informe",
            "fecha_tentiva_finalizacion": null,
            "estado": "Empezada",
            "category_id": null,
            "fecha_creacion": "2024-05-01T10:00:00",
            "user_id": 9
        });
        let task: Task = serde_json::from_value(body).unwrap();
        assert_eq!(task.text, "Escribir informe");
        assert_eq!(task.status, TaskStatus::Started);
        assert_eq!(task.category_id, None);
        assert_eq!(task.due_at, None);
    }

    #[test]
    fn test_status_update_nulls_due_date_and_category() {
        let body = serde_json::to_value(TaskUpdate::status_only(TaskStatus::Finished)).unwrap();
        assert_eq!(
            body,
            json!({
                "estado": "Finalizada",
                "fecha_tentiva_finalizacion": null,
                "category_id": null
            })
        );
    }

    #[test]
    fn test_new_user_sends_null_profile_image() {
        let body = serde_json::to_value(NewUser {
            username: "ana".to_string(),
            password: "secreto123".to_string(),
            profile_image: None,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "nombre_usuario": "ana", "contrasenia": "secreto123", "imagen_perfil": null })
        );
    }

    #[test]
    fn test_new_task_wire_shape() {
        let body = serde_json::to_value(NewTask {
            text: "Llamar al banco".to_string(),
            status: TaskStatus::NotStarted,
            category_id: 3,
            due_at: Some("2024-06-01T09:30".to_string()),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "texto": "Llamar al banco",
                "estado": "Sin Empezar",
                "category_id": 3,
                "fecha_tentiva_finalizacion": "2024-06-01T09:30"
            })
        );
    }
}
