pub mod sectors;
