// SPDX-License-Identifier: MPL-2.0
fn main() -> iced::Result {
    locale_lens::app::run()
}
