//! Test doubles shared by the module tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use taskboard_api::{
    AccessToken, ApiError, ApiResult, Category, NewCategory, NewTask, NewUser, Task, TaskApi,
    TaskStatus, TaskUpdate,
};

use crate::session::Services;
use crate::storage::MemoryStorage;
use crate::toast::{Notify, Toast, ToastKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    ListTasks,
    CreateTask,
    UpdateTask,
    ListCategories,
    CreateCategory,
}

/// Scripted backend that records every call
#[derive(Default)]
pub struct MockApi {
    token: RefCell<String>,
    tasks: RefCell<Vec<Task>>,
    categories: RefCell<Vec<Category>>,
    failing: RefCell<HashMap<Endpoint, u16>>,
    calls: RefCell<HashMap<Endpoint, usize>>,
    bearer_tokens: RefCell<Vec<String>>,
    registered: RefCell<Vec<NewUser>>,
    created_tasks: RefCell<Vec<NewTask>>,
    created_categories: RefCell<Vec<NewCategory>>,
    updates: RefCell<Vec<(u32, TaskUpdate)>>,
}

impl MockApi {
    pub fn new() -> Self {
        let api = Self::default();
        *api.token.borrow_mut() = "tok-123".to_string();
        api
    }

    pub fn with_token(self, token: &str) -> Self {
        *self.token.borrow_mut() = token.to_string();
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.borrow_mut() = tasks;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.borrow_mut() = categories;
        self
    }

    /// Make `endpoint` answer with `status` from now on
    pub fn fail(&self, endpoint: Endpoint, status: u16) {
        self.failing.borrow_mut().insert(endpoint, status);
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls.borrow().get(&endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    pub fn bearer_tokens(&self) -> HashSet<String> {
        self.bearer_tokens.borrow().iter().cloned().collect()
    }

    pub fn registered(&self) -> Vec<NewUser> {
        self.registered.borrow().clone()
    }

    pub fn created_tasks(&self) -> Vec<NewTask> {
        self.created_tasks.borrow().clone()
    }

    pub fn created_categories(&self) -> Vec<NewCategory> {
        self.created_categories.borrow().clone()
    }

    pub fn updates(&self) -> Vec<(u32, TaskUpdate)> {
        self.updates.borrow().clone()
    }

    fn hit(&self, endpoint: Endpoint) -> ApiResult<()> {
        *self.calls.borrow_mut().entry(endpoint).or_default() += 1;
        match self.failing.borrow().get(&endpoint) {
            Some(status) => Err(ApiError::Status(*status)),
            None => Ok(()),
        }
    }

    fn authed(&self, endpoint: Endpoint, token: &str) -> ApiResult<()> {
        self.bearer_tokens.borrow_mut().push(token.to_string());
        self.hit(endpoint)
    }
}

#[async_trait(?Send)]
impl TaskApi for MockApi {
    async fn login(&self, _username: &str, _password: &str) -> ApiResult<AccessToken> {
        self.hit(Endpoint::Login)?;
        Ok(AccessToken { access_token: self.token.borrow().clone() })
    }

    async fn register(&self, user: &NewUser) -> ApiResult<()> {
        self.registered.borrow_mut().push(user.clone());
        self.hit(Endpoint::Register)
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        self.authed(Endpoint::ListTasks, token)?;
        Ok(self.tasks.borrow().clone())
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<()> {
        self.created_tasks.borrow_mut().push(task.clone());
        self.authed(Endpoint::CreateTask, token)
    }

    async fn update_task(&self, token: &str, id: u32, update: &TaskUpdate) -> ApiResult<()> {
        self.updates.borrow_mut().push((id, update.clone()));
        self.authed(Endpoint::UpdateTask, token)
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.hit(Endpoint::ListCategories)?;
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, token: &str, category: &NewCategory) -> ApiResult<()> {
        self.created_categories.borrow_mut().push(category.clone());
        self.authed(Endpoint::CreateCategory, token)
    }
}

/// Keeps every toast it is handed
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<ToastKind> {
        self.toasts.borrow().iter().map(|t| t.kind).collect()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub struct Harness {
    pub services: Services,
    pub api: Rc<MockApi>,
    pub storage: MemoryStorage,
    pub notifier: Rc<RecordingNotifier>,
}

pub fn harness(api: MockApi) -> Harness {
    let api = Rc::new(api);
    let storage = MemoryStorage::default();
    let notifier = Rc::new(RecordingNotifier::default());
    let services = Services {
        api: api.clone(),
        storage: Rc::new(storage.clone()),
        notifier: notifier.clone(),
    };
    Harness { services, api, storage, notifier }
}

pub fn task(id: u32, status: TaskStatus, category_id: Option<u32>) -> Task {
    Task {
        id,
        text: format!("Tarea {}", id),
        due_at: None,
        status,
        category_id,
        created_at: "2024-05-01T10:00:00".to_string(),
        user_id: 1,
    }
}

pub fn category(id: u32, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
    }
}
