pub mod expertview_error;
