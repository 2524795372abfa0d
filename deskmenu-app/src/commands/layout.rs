use crate::context::Desktop;
use deskmenu_core::Notification;
use deskmenu_state::CycleState;
use deskmenu_tools::keyboard;

/// Advance to the next configured layout, persisting only once applied.
pub async fn cycle(desktop: &Desktop) -> anyhow::Result<()> {
    let layouts = &desktop.settings.keyboard.layouts;
    let state = CycleState::new(desktop.settings.keyboard.state_path());

    let next = state.peek_next(layouts.len()).await?;
    let layout = &layouts[next];

    desktop
        .dispatch_checked(&keyboard::set_layout(layout))
        .await?;
    state.store(next).await?;

    desktop
        .notify(Notification::new(
            format!("Layout: {}", layout.to_uppercase()),
            "",
        ))
        .await;
    Ok(())
}
