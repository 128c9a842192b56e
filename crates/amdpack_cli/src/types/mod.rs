pub mod output_mode;
