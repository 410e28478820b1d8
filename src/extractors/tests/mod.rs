mod fixtures;
mod page_tests;
