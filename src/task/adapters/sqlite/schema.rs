//! Diesel schema for task list and task persistence.

diesel::table! {
    /// Task list records.
    task_lists (id) {
        /// Task list identifier (hyphenated UUID).
        id -> Text,
        /// Display name.
        name -> Text,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
        /// Latest rename timestamp (UTC).
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier (hyphenated UUID).
        id -> Text,
        /// Owning task list identifier.
        task_list_id -> Text,
        /// Task title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Completion flag.
        is_completed -> Bool,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
        /// Completion timestamp (UTC).
        completed_at -> Nullable<Timestamp>,
    }
}

diesel::joinable!(tasks -> task_lists (task_list_id));
diesel::allow_tables_to_appear_in_same_query!(task_lists, tasks);
