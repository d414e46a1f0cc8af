pub mod sqlx_record_repository_impl;
