//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::recommend::QUICK_PROMPTS;
use crate::model::{ActiveSection, ContentView, PageTurn, QuizState};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            }
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            }
        }

        // Handle auth panel modal
        if model.is_auth_panel_open().await {
            match key.code {
                KeyCode::Esc => {
                    model.hide_auth_panel().await;
                }
                KeyCode::Tab => {
                    let mut state = model.ui_state.lock().await;
                    state.auth_form.toggle_mode();
                }
                KeyCode::Down => {
                    let mut state = model.ui_state.lock().await;
                    let mode = state.auth_form.mode;
                    state.auth_form.field = state.auth_form.field.next(mode);
                }
                KeyCode::Up => {
                    let mut state = model.ui_state.lock().await;
                    let mode = state.auth_form.mode;
                    state.auth_form.field = state.auth_form.field.prev(mode);
                }
                KeyCode::Backspace => {
                    let mut state = model.ui_state.lock().await;
                    state.auth_form.active_input_mut().pop();
                }
                KeyCode::Enter => {
                    drop(model);
                    self.submit_auth_form().await;
                }
                KeyCode::Char(c) => {
                    let mut state = model.ui_state.lock().await;
                    state.auth_form.active_input_mut().push(c);
                }
                _ => {}
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        // Handle chat prompt input when in the prompt section
        if ui_state.active_section == ActiveSection::ChatPrompt {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::Enter => {
                    let text = model.take_chat_input().await;
                    if text.trim().is_empty() {
                        return Ok(());
                    }
                    // Sending from the prompt opens the conversation view
                    model.reset_view(ContentView::Chat).await;
                    model.set_active_section(ActiveSection::MainContent).await;
                    drop(model);
                    self.send_chat_message(text).await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    let mut state = model.ui_state.lock().await;
                    state.chat_input.clear();
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_chat_input().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even while typing when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_chat_input(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle MainContent section navigation, per view
        if ui_state.active_section == ActiveSection::MainContent {
            let view = model.get_content_state().await.view;

            // Reading mode has its own key set
            if matches!(view, ContentView::Reader { .. }) {
                match key.code {
                    KeyCode::Left => {
                        self.turn_reader_page(&model, PageTurn::Backward).await;
                        return Ok(());
                    }
                    KeyCode::Right => {
                        self.turn_reader_page(&model, PageTurn::Forward).await;
                        return Ok(());
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        self.with_reader(&model, |p| p.font_larger()).await;
                        return Ok(());
                    }
                    KeyCode::Char('-') => {
                        self.with_reader(&model, |p| p.font_smaller()).await;
                        return Ok(());
                    }
                    KeyCode::Char('t') | KeyCode::Char('T') => {
                        self.with_reader(&model, |p| p.toggle_theme()).await;
                        return Ok(());
                    }
                    KeyCode::Esc | KeyCode::Backspace => {
                        model.navigate_back().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }

            // Quiz keys depend on where the session is
            if matches!(view, ContentView::Quiz { .. }) {
                let quiz = model.get_quiz_state().await;
                match quiz {
                    QuizState::InProgress(_) => {
                        match key.code {
                            KeyCode::Up => {
                                drop(model);
                                self.quiz_move_selection(-1).await;
                                return Ok(());
                            }
                            KeyCode::Down => {
                                drop(model);
                                self.quiz_move_selection(1).await;
                                return Ok(());
                            }
                            KeyCode::Char(c @ '1'..='4') => {
                                drop(model);
                                self.quiz_select_option(c as usize - '1' as usize).await;
                                return Ok(());
                            }
                            KeyCode::Enter => {
                                drop(model);
                                self.quiz_confirm().await;
                                return Ok(());
                            }
                            KeyCode::Esc | KeyCode::Backspace => {
                                drop(model);
                                self.go_back().await;
                                return Ok(());
                            }
                            _ => {}
                        }
                        return Ok(());
                    }
                    QuizState::Completed(_) => {
                        match key.code {
                            KeyCode::Enter => {
                                drop(model);
                                self.quiz_reset().await;
                            }
                            KeyCode::Esc | KeyCode::Backspace => {
                                drop(model);
                                self.go_back().await;
                            }
                            _ => {}
                        }
                        return Ok(());
                    }
                    QuizState::SelectingBook => {}
                }
            }

            // Quick prompts send straight from the conversation view
            if matches!(view, ContentView::Chat) {
                if let KeyCode::Char(c @ '1'..='4') = key.code {
                    let prompt = QUICK_PROMPTS[c as usize - '1' as usize].to_string();
                    drop(model);
                    self.send_chat_message(prompt).await;
                    return Ok(());
                }
            }

            match key.code {
                KeyCode::Up => {
                    model.content_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.content_move_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.activate_content_selection().await;
                    return Ok(());
                }
                KeyCode::Backspace | KeyCode::Esc => {
                    drop(model);
                    self.go_back().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            KeyCode::Enter => {
                // Handle Enter based on active section
                match ui_state.active_section {
                    ActiveSection::Library => {
                        let selected = ui_state.library_selected;
                        drop(model);
                        self.open_library_item(selected).await;
                        return Ok(());
                    }
                    ActiveSection::Categories => {
                        let selected = ui_state.category_selected;
                        drop(model);
                        self.open_category(selected).await;
                        return Ok(());
                    }
                    _ => {}
                }
            }
            // Sign in, or sign out when a session is active
            KeyCode::Char('a') | KeyCode::Char('A') => {
                if model.get_user_email().await.is_some() {
                    drop(model);
                    self.sign_out().await;
                } else {
                    model.show_auth_panel().await;
                }
            }
            // Focus the chat prompt
            KeyCode::Char('g') | KeyCode::Char('G') => {
                model.set_active_section(ActiveSection::ChatPrompt).await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }

    async fn turn_reader_page(&self, model: &crate::model::AppModel, direction: PageTurn) {
        let mut state = model.content_state.lock().await;
        if let ContentView::Reader { position, .. } = &mut state.view {
            if position.turn_page(direction) {
                tracing::debug!(book_id = %position.book_id, page = position.page, "Page turned");
            }
        }
    }

    async fn with_reader<F>(&self, model: &crate::model::AppModel, f: F)
    where
        F: FnOnce(&mut crate::model::ReaderPosition),
    {
        let mut state = model.content_state.lock().await;
        if let ContentView::Reader { position, .. } = &mut state.view {
            f(position);
        }
    }
}
