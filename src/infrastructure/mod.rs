pub mod notifiers;
