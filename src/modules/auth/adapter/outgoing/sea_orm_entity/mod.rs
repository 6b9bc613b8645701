pub mod admins;
