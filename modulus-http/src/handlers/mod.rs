pub mod modexp;
