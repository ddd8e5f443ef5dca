mod core;
mod iter;
mod traits;
