// UI Components
// This module contains all reusable UI components

pub mod student_card;

pub use student_card::StudentCard;
