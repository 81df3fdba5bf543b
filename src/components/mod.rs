pub mod suggestion_list;
