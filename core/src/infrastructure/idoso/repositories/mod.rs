pub mod idoso_repository;
