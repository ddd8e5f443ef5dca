mod collections;
mod combinators;
mod constraints;
