pub use super::ship::Entity as Ship;
