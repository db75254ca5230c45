pub mod organize;
