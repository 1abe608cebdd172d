pub mod resource_set;
