use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::TaskDescription;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::todo::errors::TodoError;
use crate::user::models::UserId;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    task: String,
    completed: bool,
    added_at: DateTime<Utc>,
    user_id: i64,
}

impl TodoRow {
    fn try_into_todo(self) -> Result<Todo, TodoError> {
        Ok(Todo {
            id: TodoId(self.id),
            task: TaskDescription::new(self.task)?,
            completed: self.completed,
            added_at: self.added_at,
            user_id: UserId(self.user_id),
        })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (task, user_id)
            VALUES ($1, $2)
            RETURNING id, task, completed, added_at, user_id
            "#,
        )
        .bind(new_todo.task.as_str())
        .bind(new_todo.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.try_into_todo()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, task, completed, added_at, user_id
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.map(TodoRow::try_into_todo).transpose()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, task, completed, added_at, user_id
            FROM todos
            WHERE user_id = $1
            ORDER BY added_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TodoRow::try_into_todo).collect()
    }

    async fn list_pending_by_owner(&self, owner: UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, task, completed, added_at, user_id
            FROM todos
            WHERE user_id = $1 AND completed = FALSE
            ORDER BY added_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TodoRow::try_into_todo).collect()
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET task = $2, completed = $3
            WHERE id = $1
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.task.as_str())
        .bind(todo.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(todo.id.to_string()));
        }

        Ok(todo)
    }
}
