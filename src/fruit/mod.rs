pub use spawn::random_free_cell;

mod spawn;
