use common::address::Subdistrict;
use common::files::FileSlot;
use common::model::application::{ApplicationRecord, ServiceArea, StudentType, TrackKind};

/// Draft fields edited through plain text inputs.
#[derive(Clone, Copy)]
pub enum FormField {
    Title,
    FirstName,
    LastName,
    NationalId,
    BirthDate,
    Phone,
    FatherName,
    MotherName,
    GuardianName,
    HouseNo,
    Village,
    Moo,
    SchoolName,
    SchoolDistrict,
    SchoolProvince,
    Gpa,
    SubGpa,
}

#[derive(Clone)]
pub enum Msg {
    GuardRecords(Vec<ApplicationRecord>),
    Field(FormField, String),
    SetServiceArea(ServiceArea),
    SetStudentType(StudentType),
    SetTrackKind(TrackKind),
    SetTrack(String),
    AddressQuery(String),
    PickAddress(&'static Subdistrict),
    FilePicked(FileSlot, web_sys::File),
    FileLoaded(FileSlot, String),
    FileRejected(String),
    Submit,
    CloudDone(bool),
    Finish,
}
