pub mod repo_types;
