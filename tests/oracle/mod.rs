mod common;
mod compare_ln_test;
