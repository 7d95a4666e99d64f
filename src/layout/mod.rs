pub mod assemble;
pub mod line_word;
pub mod phrase;
pub mod position;
pub mod render;
pub mod sort;

pub use assemble::assemble_line_list;
pub use render::transcript;
pub use sort::sort_word_list;
