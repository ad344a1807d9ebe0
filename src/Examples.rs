pub mod reactor_examples;
