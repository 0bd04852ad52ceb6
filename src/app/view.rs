use super::messages::{Message, Screen};
use super::state::{
    App, COVER_HEIGHT_PX, COVER_WIDTH_PX, NoticeLevel, SCREEN_PADDING_PX, SECTION_SPACING_PX,
    UNSELECTED_AUTHOR, UNSELECTED_TITLE, Workflow,
};
use crate::settings::{ENCODINGS, SettingsPatch};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, button, checkbox, column, container, horizontal_space, pick_list, radio, row,
    scrollable, text,
};
use iced::{Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.screen {
            Screen::Home => self.home_screen(),
            Screen::Settings => self.settings_screen(),
        };

        column![self.tab_bar(), body]
            .padding(SCREEN_PADDING_PX)
            .spacing(SECTION_SPACING_PX)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn tab_bar(&self) -> Element<'_, Message> {
        let tab = |label: &'static str, screen: Screen| {
            let style: fn(&Theme, button::Status) -> button::Style = if self.screen == screen {
                button::primary
            } else {
                button::secondary
            };
            button(label)
                .style(style)
                .on_press(Message::Navigate(screen))
        };

        row![
            tab("ホーム", Screen::Home),
            tab("設定", Screen::Settings),
            horizontal_space(),
            text(self.status_label()),
        ]
        .spacing(8)
        .align_y(Vertical::Center)
        .into()
    }

    fn status_label(&self) -> &'static str {
        match self.workflow {
            Workflow::Scanning { .. } => "読み込み中…",
            Workflow::Converting { .. } => "変換中…",
            Workflow::Idle | Workflow::Ready { .. } => "",
        }
    }

    fn home_screen(&self) -> Element<'_, Message> {
        let (title, author) = match self.metadata() {
            Some(metadata) => (metadata.title.as_str(), metadata.author.as_str()),
            None => (UNSELECTED_TITLE, UNSELECTED_AUTHOR),
        };

        let cover = container(text("No Cover").size(14.0))
            .width(Length::Fixed(COVER_WIDTH_PX))
            .height(Length::Fixed(COVER_HEIGHT_PX))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(container::bordered_box);

        let upload = button("アップロード").on_press_maybe(
            self.can_upload()
                .then_some(Message::UploadRequested),
        );
        let download_label = if self.is_converting() {
            "変換中…"
        } else {
            "EPUBをダウンロード"
        };
        let download = button(download_label).on_press_maybe(
            self.can_download()
                .then_some(Message::DownloadRequested),
        );

        let mut content: Column<'_, Message> = column![
            row![
                cover,
                self.title_block(title, author),
            ]
            .spacing(SECTION_SPACING_PX)
            .align_y(Vertical::Center),
            row![upload, download].spacing(8),
        ]
        .spacing(SECTION_SPACING_PX);

        if let Some(notice) = &self.notice {
            let message = match notice.level {
                NoticeLevel::Info => text(notice.text.as_str()).style(text::success),
                NoticeLevel::Error => text(notice.text.as_str()).style(text::danger),
            };
            content = content.push(
                container(
                    row![
                        message.width(Length::Fill),
                        button("閉じる")
                            .style(button::text)
                            .on_press(Message::DismissNotice),
                    ]
                    .spacing(8)
                    .align_y(Vertical::Center),
                )
                .padding(8)
                .style(container::rounded_box),
            );
        }

        content.into()
    }

    fn title_block<'a>(&'a self, title: &'a str, author: &'a str) -> Column<'a, Message> {
        let mut block = column![text(title).size(24.0), text(author).size(16.0)].spacing(8);
        if let Some(input) = self.workflow.input() {
            block = block.push(text(input.display().to_string()).size(12.0));
        }
        block
    }

    fn settings_screen(&self) -> Element<'_, Message> {
        let settings = &self.settings;

        let direction = row![
            radio("縦書き", true, Some(settings.vertical), |value| {
                Message::SettingsChanged(SettingsPatch::vertical(value))
            }),
            radio("横書き", false, Some(settings.vertical), |value| {
                Message::SettingsChanged(SettingsPatch::vertical(value))
            }),
        ]
        .spacing(SECTION_SPACING_PX);

        let encoding = pick_list(ENCODINGS, Some(settings.encoding), |value| {
            Message::SettingsChanged(SettingsPatch::encoding(value))
        });

        let custom_list = settings.custom_css_paths.iter().enumerate().fold(
            Column::new().spacing(4),
            |list, (index, path)| {
                list.push(
                    row![
                        text(path.as_str()).width(Length::Fill),
                        button("削除")
                            .style(button::danger)
                            .on_press(Message::RemoveStylesheet(index)),
                    ]
                    .spacing(8)
                    .align_y(Vertical::Center),
                )
            },
        );
        let add_stylesheet = button("CSSを追加").on_press_maybe(
            self.dialog
                .is_none()
                .then_some(Message::AddStylesheetRequested),
        );

        let panel = column![
            text("変換設定").size(20.0),
            text("書字方向"),
            direction,
            checkbox("Prelude (基本スタイル)", settings.use_prelude)
                .on_toggle(|value| Message::SettingsChanged(SettingsPatch::use_prelude(value))),
            checkbox("Miyabi (雅テーマ)", settings.use_miyabi)
                .on_toggle(|value| Message::SettingsChanged(SettingsPatch::use_miyabi(value))),
            row![text("文字コード"), encoding]
                .spacing(8)
                .align_y(Vertical::Center),
            text("カスタムCSS"),
            custom_list,
            add_stylesheet,
        ]
        .spacing(12);

        scrollable(container(panel).width(Length::Fill)).into()
    }
}
