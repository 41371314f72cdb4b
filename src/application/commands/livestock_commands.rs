// src/application/commands/livestock_commands.rs
//
// Livestock Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the registry service
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::{LivestockDto, LivestockPayloadDto},
    error_handling::ErrorResponse,
    state::AppState,
};

pub type CommandResult<T> = Result<T, ErrorResponse>;

/// createLivestock
pub fn create_livestock(state: &AppState, dto: LivestockPayloadDto) -> CommandResult<LivestockDto> {
    let livestock = state.livestock_service.create_livestock(dto.into())?;
    Ok(livestock.into())
}

/// getLivestockById
pub fn get_livestock_by_id(state: &AppState, id: &str) -> CommandResult<LivestockDto> {
    let livestock = state.livestock_service.get_livestock_by_id(id)?;
    Ok(livestock.into())
}

/// getLivestockByName
pub fn get_livestock_by_name(state: &AppState, name: &str) -> CommandResult<Vec<LivestockDto>> {
    let matches = state.livestock_service.get_livestock_by_name(name)?;
    Ok(matches.into_iter().map(LivestockDto::from).collect())
}

/// getAllLivestock
pub fn get_all_livestock(state: &AppState) -> CommandResult<Vec<LivestockDto>> {
    let all = state.livestock_service.list_all_livestock()?;
    Ok(all.into_iter().map(LivestockDto::from).collect())
}

/// updateLivestock
pub fn update_livestock(
    state: &AppState,
    id: &str,
    dto: LivestockPayloadDto,
) -> CommandResult<LivestockDto> {
    let livestock = state.livestock_service.update_livestock(id, dto.into())?;
    Ok(livestock.into())
}

/// deleteLivestock
pub fn delete_livestock(state: &AppState, id: &str) -> CommandResult<LivestockDto> {
    let livestock = state.livestock_service.delete_livestock(id)?;
    Ok(livestock.into())
}
