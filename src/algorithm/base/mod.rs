pub mod ant;
