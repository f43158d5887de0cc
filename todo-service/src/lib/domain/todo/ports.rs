use async_trait::async_trait;

use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::todo::errors::TodoError;
use crate::user::models::UserId;

/// Port for todo domain service operations.
///
/// All operations are owner-scoped: the `caller` / `owner` argument is the
/// verified identity of the requester, and no operation reaches across it.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a new todo owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;

    /// List all of the owner's todos, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// List the owner's not-yet-completed todos.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_pending_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// Mark a todo as completed, on behalf of `caller`.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist, or is owned by another user
    /// * `DatabaseError` - Database operation failed
    async fn complete_todo(&self, id: TodoId, caller: UserId) -> Result<Todo, TodoError>;
}

/// Persistence operations for the todo aggregate.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo, assigning id, completion default, and timestamp.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;

    /// Retrieve a todo by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;

    /// Retrieve all todos owned by `owner`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// Retrieve the not-yet-completed todos owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_pending_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;

    /// Update an existing todo in storage.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;
}
