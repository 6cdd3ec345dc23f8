//! Diesel schema for task board persistence.

diesel::table! {
    /// Projects and their explicit member sets.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Explicit members, excluding the owner.
        member_ids -> Array<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Lists, unique by name within a project.
    task_lists (id) {
        /// List identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// List name.
        #[max_length = 255]
        name -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks with their list placement and assignees.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning list.
        list_id -> Uuid,
        /// Owning project, denormalized from the list.
        project_id -> Uuid,
        /// Task title.
        title -> Text,
        /// 1-based rank within the list.
        position -> Int4,
        /// Assigned users.
        assignee_ids -> Array<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only activity entries.
    activity_logs (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Activity kind tag.
        #[max_length = 50]
        kind -> Varchar,
        /// Project the mutation happened in.
        project_id -> Uuid,
        /// Mutated entity.
        subject_id -> Uuid,
        /// Acting user.
        actor_id -> Uuid,
        /// Source list, if any.
        source_list_id -> Nullable<Uuid>,
        /// Affected user, if any.
        target_user_id -> Nullable<Uuid>,
        /// Destination list, if any.
        destination_list_id -> Nullable<Uuid>,
        /// Recording timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// User profiles.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Login handle.
        #[max_length = 100]
        username -> Varchar,
        /// Contact email.
        #[max_length = 255]
        email -> Varchar,
        /// Full name.
        #[max_length = 255]
        full_name -> Varchar,
    }
}
