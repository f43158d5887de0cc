use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ownership;
use crate::domain::todo::ownership::Action;
use crate::todo::errors::TodoError;
use crate::todo::ports::TodoRepository;
use crate::todo::ports::TodoServicePort;
use crate::user::models::UserId;

/// Domain service implementation for todo operations.
///
/// Enforces the ownership invariant on every mutation before touching
/// the repository.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    /// Create a new todo service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let created = self.repository.create(new_todo).await?;

        tracing::info!(todo_id = %created.id, user_id = %created.user_id, "Todo created");

        Ok(created)
    }

    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_by_owner(owner).await
    }

    async fn list_pending_todos(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_pending_by_owner(owner).await
    }

    async fn complete_todo(&self, id: TodoId, caller: UserId) -> Result<Todo, TodoError> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id.to_string()))?;

        if !ownership::authorize(caller, todo.user_id, Action::Write).is_allowed() {
            tracing::warn!(
                todo_id = %id,
                caller = %caller,
                owner = %todo.user_id,
                "Denied completion of a todo owned by another user"
            );
            // Denials are indistinguishable from absent todos
            return Err(TodoError::NotFound(id.to_string()));
        }

        todo.completed = true;

        self.repository.update(todo).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::todo::models::TaskDescription;

    mock! {
        pub TestTodoRepository {}

        #[async_trait]
        impl TodoRepository for TestTodoRepository {
            async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;
            async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;
            async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;
            async fn list_pending_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError>;
            async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;
        }
    }

    fn todo_owned_by(owner: UserId) -> Todo {
        Todo {
            id: TodoId(1),
            task: TaskDescription::new("Faire les courses".to_string()).unwrap(),
            completed: false,
            added_at: Utc::now(),
            user_id: owner,
        }
    }

    #[tokio::test]
    async fn test_create_todo_carries_caller_identity() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_create()
            .withf(|new_todo| new_todo.user_id == UserId(1))
            .times(1)
            .returning(|new_todo| {
                Ok(Todo {
                    id: TodoId(1),
                    task: new_todo.task,
                    completed: false,
                    added_at: Utc::now(),
                    user_id: new_todo.user_id,
                })
            });

        let service = TodoService::new(Arc::new(repository));

        let new_todo = NewTodo {
            task: TaskDescription::new("Nouvelle tâche".to_string()).unwrap(),
            user_id: UserId(1),
        };

        let todo = service.create_todo(new_todo).await.unwrap();
        assert_eq!(todo.user_id, UserId(1));
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_complete_todo_success() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(todo_owned_by(UserId(1)))));

        repository
            .expect_update()
            .withf(|todo| todo.completed)
            .times(1)
            .returning(|todo| Ok(todo));

        let service = TodoService::new(Arc::new(repository));

        let todo = service.complete_todo(TodoId(1), UserId(1)).await.unwrap();
        assert!(todo.completed);
    }

    #[tokio::test]
    async fn test_complete_todo_denied_for_non_owner() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(todo_owned_by(UserId(1)))));

        // The update must never happen
        repository.expect_update().times(0);

        let service = TodoService::new(Arc::new(repository));

        let result = service.complete_todo(TodoId(1), UserId(2)).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_complete_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TodoService::new(Arc::new(repository));

        let result = service.complete_todo(TodoId(99), UserId(1)).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_todos_scoped_to_owner() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_list_by_owner()
            .withf(|owner| *owner == UserId(1))
            .times(1)
            .returning(|owner| Ok(vec![todo_owned_by(owner)]));

        let service = TodoService::new(Arc::new(repository));

        let todos = service.list_todos(UserId(1)).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].user_id, UserId(1));
    }
}
