#[cfg(feature = "derive")]
mod derive;
mod manual;
