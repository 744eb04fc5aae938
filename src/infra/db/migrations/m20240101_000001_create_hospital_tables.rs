//! Migration: Create the hospital tables.
//!
//! Schedules are owned by their doctor and cascade on delete; appointments
//! are patient-facing records and restrict doctor deletion instead.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(ColumnDef::new(Admins::Role).string().not_null())
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .col(ColumnDef::new(Doctors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Doctors::Name).string().not_null())
                    .col(ColumnDef::new(Doctors::Specialty).string().not_null())
                    .col(ColumnDef::new(Doctors::Phone).string().not_null())
                    .col(ColumnDef::new(Doctors::Bio).text().null())
                    .col(ColumnDef::new(Doctors::Photo).string().null())
                    .col(
                        ColumnDef::new(Doctors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Doctors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Doctors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DoctorSchedules::Table)
                    .col(
                        ColumnDef::new(DoctorSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DoctorSchedules::DoctorId).uuid().not_null())
                    .col(
                        ColumnDef::new(DoctorSchedules::DayOfWeek)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorSchedules::StartTime)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DoctorSchedules::EndTime).string().not_null())
                    .col(ColumnDef::new(DoctorSchedules::Poli).string().not_null())
                    .col(
                        ColumnDef::new(DoctorSchedules::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DoctorSchedules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorSchedules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_doctor")
                            .from(DoctorSchedules::Table, DoctorSchedules::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_doctor_id")
                    .table(DoctorSchedules::Table)
                    .col(DoctorSchedules::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appointments::PatientName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Phone).string().not_null())
                    .col(ColumnDef::new(Appointments::DoctorId).uuid().not_null())
                    .col(ColumnDef::new(Appointments::VisitDate).date().not_null())
                    .col(ColumnDef::new(Appointments::Notes).text().null())
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_doctor")
                            .from(Appointments::Table, Appointments::DoctorId)
                            .to(Doctors::Table, Doctors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_doctor_id")
                    .table(Appointments::Table)
                    .col(Appointments::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_status")
                    .table(Appointments::Table)
                    .col(Appointments::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::HospitalName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::Tagline).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Email).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Phone).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::FacebookUrl)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::TwitterUrl).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::InstagramUrl)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::YoutubeUrl).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PageSections::Table)
                    .col(
                        ColumnDef::new(PageSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PageSections::SectionKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PageSections::Title).string().not_null())
                    .col(ColumnDef::new(PageSections::Content).json_binary().not_null())
                    .col(
                        ColumnDef::new(PageSections::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PageSections::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DoctorSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Doctors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Admins {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Doctors {
    Table,
    Id,
    Name,
    Specialty,
    Phone,
    Bio,
    Photo,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DoctorSchedules {
    Table,
    Id,
    DoctorId,
    DayOfWeek,
    StartTime,
    EndTime,
    Poli,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Appointments {
    Table,
    Id,
    PatientName,
    Phone,
    DoctorId,
    VisitDate,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    HospitalName,
    Tagline,
    Email,
    Phone,
    FacebookUrl,
    TwitterUrl,
    InstagramUrl,
    YoutubeUrl,
}

#[derive(Iden)]
enum PageSections {
    Table,
    Id,
    SectionKey,
    Title,
    Content,
    IsActive,
    DisplayOrder,
}
