pub mod o365group_add;
