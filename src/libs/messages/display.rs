//! Display implementation for ptm application messages.
//!
//! All user-facing text lives here. English is the default rendering and a
//! Vietnamese rendering is kept alongside it; the active language is chosen
//! once at startup through [`set_language`](super::set_language).

use super::types::{Language, Message};
use crate::libs::error::Field;
use crate::libs::task::PRIORITY_LABELS;
use std::fmt::{Display, Formatter, Result};

impl Message {
    /// Renders the message in the given language, ignoring the process-wide setting.
    pub fn localized(&self, language: Language) -> String {
        match language {
            Language::En => self.english(),
            Language::Vi => self.vietnamese(),
        }
    }

    fn english(&self) -> String {
        match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully with ID: {}", id),
            Message::DemoTaskSkipped(title) => format!("Sample task '{}' was not added", title),

            // === VALIDATION MESSAGES ===
            Message::EmptyField(Field::Title) => "Title must not be empty.".to_string(),
            Message::EmptyField(Field::DueDate) => "Due date must not be empty.".to_string(),
            Message::InvalidDateFormat(value) => {
                format!("Invalid due date '{}'. Please use the YYYY-MM-DD format.", value)
            }
            Message::InvalidPriority(value) => format!(
                "Invalid priority '{}'. Please choose one of: {}.",
                value,
                PRIORITY_LABELS.join(", ")
            ),
            Message::DuplicateTask(title) => {
                format!("Task '{}' already exists with the same due date.", title)
            }

            // === STORE MESSAGES ===
            Message::StoreMissing(path) => format!("Task store {} does not exist yet", path),
            Message::StoreLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::StoreSaved(count, path) => format!("Saved {} task(s) to {}", count, path),
            Message::StoreReadFailed(path, error) => {
                format!("Error reading task store {}: {}", path, error)
            }
            Message::StoreNotAnArray(path) => {
                format!("Task store {} does not contain a JSON array", path)
            }
            Message::StoreInvalidRecord(path, index, error) => format!(
                "Record {} in task store {} is not a valid task ({}); the store will not be overwritten",
                index, path, error
            ),
            Message::StoreWriteFailed(path, error) => {
                format!("Error writing task store {}: {}", path, error)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigFileNotFound(path) => {
                format!("Configuration file {} not found, using defaults", path)
            }
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigReadFailed(path, error) => {
                format!("Failed to read configuration {}: {}", path, error)
            }
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
        }
    }

    fn vietnamese(&self) -> String {
        match self {
            Message::TaskAdded(id) => format!("Đã thêm nhiệm vụ mới thành công với ID: {}", id),
            Message::DemoTaskSkipped(title) => format!("Nhiệm vụ mẫu '{}' không được thêm", title),

            Message::EmptyField(Field::Title) => "Tiêu đề không được để trống.".to_string(),
            Message::EmptyField(Field::DueDate) => "Ngày đến hạn không được để trống.".to_string(),
            Message::InvalidDateFormat(value) => format!(
                "Ngày đến hạn '{}' không hợp lệ. Vui lòng sử dụng định dạng YYYY-MM-DD.",
                value
            ),
            Message::InvalidPriority(value) => format!(
                "Mức độ ưu tiên '{}' không hợp lệ. Vui lòng chọn từ: {}.",
                value,
                PRIORITY_LABELS.join(", ")
            ),
            Message::DuplicateTask(title) => {
                format!("Nhiệm vụ '{}' đã tồn tại với cùng ngày đến hạn.", title)
            }

            Message::StoreMissing(path) => format!("File database {} chưa tồn tại", path),
            Message::StoreLoaded(count, path) => format!("Đã đọc {} nhiệm vụ từ {}", count, path),
            Message::StoreSaved(count, path) => format!("Đã ghi {} nhiệm vụ vào {}", count, path),
            Message::StoreReadFailed(path, error) => {
                format!("Lỗi khi đọc file database {}: {}", path, error)
            }
            Message::StoreNotAnArray(path) => {
                format!("File database {} không chứa mảng JSON", path)
            }
            Message::StoreInvalidRecord(path, index, error) => format!(
                "Bản ghi {} trong file database {} không phải nhiệm vụ hợp lệ ({}); file sẽ không bị ghi đè",
                index, path, error
            ),
            Message::StoreWriteFailed(path, error) => {
                format!("Lỗi khi ghi vào file database {}: {}", path, error)
            }

            Message::ConfigFileNotFound(path) => {
                format!("Không tìm thấy file cấu hình {}, dùng giá trị mặc định", path)
            }
            Message::ConfigLoaded(path) => format!("Đã đọc cấu hình từ {}", path),
            Message::ConfigReadFailed(path, error) => {
                format!("Lỗi khi đọc file cấu hình {}: {}", path, error)
            }
            Message::ConfigSaved(path) => format!("Đã lưu cấu hình vào {}", path),
        }
    }
}

impl Display for Message {
    /// Writes the message in the language selected for this process.
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.localized(super::language()))
    }
}
