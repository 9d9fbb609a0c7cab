//! Fixed string catalog
//!
//! English and Arabic are exhaustive matches, so a new key does not compile
//! until both are filled in. The other languages only cover navigation and
//! wizard chrome and fall back to English.

use contracts::enums::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // app
    AppTitle,
    AppSubtitle,
    Loading,
    Language,
    ServerOnline,
    ServerOffline,
    DemoMode,

    // nav
    NavHome,
    NavNewClaim,
    NavTrackClaim,

    // wizard chrome
    StepContact,
    StepVehicle,
    StepIncident,
    StepAttachments,
    StepReview,
    HintContact,
    HintVehicle,
    HintIncident,
    HintAttachments,
    HintReview,
    StepProgress,
    Back,
    Next,
    Submit,
    SubmitFailed,
    Dismiss,

    // contact
    Country,
    MobileNumber,
    NationalId,
    ReporterName,
    ReporterEmail,

    // vehicle
    PlateNumber,
    PlateCountry,
    VehicleType,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    VehicleColor,
    PolicyNumber,
    CoverageType,
    IsFleet,

    // incident
    IncidentDate,
    IncidentTime,
    IncidentLocation,
    Latitude,
    Longitude,
    Description,
    IsDrivable,
    HasInjuries,
    ThirdPartyInvolved,
    PoliceReportNumber,

    // attachments
    AttachmentsTitle,
    NoAttachments,
    AddAttachment,
    RemoveAttachment,
    AttachmentUrl,
    AttachmentType,
    AttachmentDescription,

    // review
    ReviewTitle,
    Yes,
    No,

    // validation
    ValidationRequired,
    ValidationInvalidEmail,
    ValidationInvalidFormat,
    ValidationTooLong,
    ValidationOutOfRange,

    // success
    SuccessTitle,
    SuccessMessage,
    SuccessFnolId,
    SuccessTrackLink,
    Copy,
    Copied,

    // tracking
    TrackingTitle,
    TrackingSubtitle,
    TrackingEnterFnolId,
    TrackingSearch,
    TrackingNotFound,
    TrackingReference,
    TrackingProgress,
    TrackingStatus,
    TrackingSeverity,
    TrackingRoute,
    TrackingSubmitted,
    TrackingLastUpdated,

    // status / severity / route values
    StatusSubmitted,
    StatusInProgress,
    StatusCompleted,
    StatusRejected,
    Unknown,
    SeverityHigh,
    SeverityMedium,
    SeverityLow,
    RouteComplex,
    RouteStandard,
    RouteFastTrack,
    RoutePending,

    // home
    HomeHeadline,
    HomeIntro,
    HomeNewClaimBody,
    HomeTrackBody,
    SupportedCountries,

    // not found
    NotFoundTitle,
    NotFoundBody,
}

/// Text for `key` in `language`; never empty
pub fn translate(language: LanguageCode, key: TextKey) -> &'static str {
    match language {
        LanguageCode::En => en(key),
        LanguageCode::Ar => ar(key),
        LanguageCode::Hi => hi(key).unwrap_or_else(|| en(key)),
        LanguageCode::Ur => ur(key).unwrap_or_else(|| en(key)),
        LanguageCode::Ml => ml(key).unwrap_or_else(|| en(key)),
        LanguageCode::Tl => tl(key).unwrap_or_else(|| en(key)),
    }
}

/// Substitute `{0}`, `{1}`, ... in a catalog template
pub fn fill(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{}}}", i), arg)
        })
}

fn en(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "GCC Motor FNOL",
        AppSubtitle => "First Notice of Loss",
        Loading => "Loading...",
        Language => "Language",
        ServerOnline => "Online",
        ServerOffline => "Offline",
        DemoMode => "Demo mode",

        NavHome => "Home",
        NavNewClaim => "Report a Claim",
        NavTrackClaim => "Track Claim",

        StepContact => "Contact",
        StepVehicle => "Vehicle",
        StepIncident => "Incident",
        StepAttachments => "Attachments",
        StepReview => "Review",
        HintContact => "Enter your contact information for claim updates",
        HintVehicle => "Provide vehicle and insurance details",
        HintIncident => "Describe the incident and circumstances",
        HintAttachments => "Add links to photos, videos and documents",
        HintReview => "Review all information before submission",
        StepProgress => "Step {0} of {1}",
        Back => "Back",
        Next => "Next",
        Submit => "Submit Claim",
        SubmitFailed => "An error occurred while submitting your claim",
        Dismiss => "Dismiss",

        Country => "Country",
        MobileNumber => "Mobile Number",
        NationalId => "National ID",
        ReporterName => "Full Name",
        ReporterEmail => "Email",

        PlateNumber => "Plate Number",
        PlateCountry => "Plate Country",
        VehicleType => "Vehicle Type",
        VehicleMake => "Make",
        VehicleModel => "Model",
        VehicleYear => "Year",
        VehicleColor => "Color",
        PolicyNumber => "Policy Number",
        CoverageType => "Coverage Type",
        IsFleet => "Fleet vehicle",

        IncidentDate => "Incident Date",
        IncidentTime => "Incident Time",
        IncidentLocation => "Location",
        Latitude => "Latitude",
        Longitude => "Longitude",
        Description => "Description",
        IsDrivable => "Vehicle is drivable",
        HasInjuries => "Anyone injured",
        ThirdPartyInvolved => "Third party involved",
        PoliceReportNumber => "Police Report Number",

        AttachmentsTitle => "Attachments",
        NoAttachments => "No attachments added yet",
        AddAttachment => "Add attachment",
        RemoveAttachment => "Remove",
        AttachmentUrl => "File URL",
        AttachmentType => "Type",
        AttachmentDescription => "Note",

        ReviewTitle => "Review your claim",
        Yes => "Yes",
        No => "No",

        ValidationRequired => "This field is required",
        ValidationInvalidEmail => "Invalid email address",
        ValidationInvalidFormat => "Invalid format",
        ValidationTooLong => "Too long",
        ValidationOutOfRange => "Must be between {0} and {1}",

        SuccessTitle => "Claim Submitted",
        SuccessMessage => "Your claim has been received and is being processed.",
        SuccessFnolId => "Your FNOL reference",
        SuccessTrackLink => "Track this claim",
        Copy => "Copy",
        Copied => "Copied",

        TrackingTitle => "Track Your Claim",
        TrackingSubtitle => "Enter your FNOL reference number to check claim status",
        TrackingEnterFnolId => "FNOL reference, e.g. FNOL-UAE-2025-000001",
        TrackingSearch => "Search",
        TrackingNotFound => "FNOL not found",
        TrackingReference => "Claim Reference",
        TrackingProgress => "Claim Progress",
        TrackingStatus => "Status",
        TrackingSeverity => "Severity",
        TrackingRoute => "Processing Route",
        TrackingSubmitted => "Submitted",
        TrackingLastUpdated => "Last Updated",

        StatusSubmitted => "Submitted",
        StatusInProgress => "In Progress",
        StatusCompleted => "Completed",
        StatusRejected => "Rejected",
        Unknown => "Unknown",
        SeverityHigh => "High Priority",
        SeverityMedium => "Medium Priority",
        SeverityLow => "Low Priority",
        RouteComplex => "Complex Review",
        RouteStandard => "Standard Processing",
        RouteFastTrack => "Fast Track",
        RoutePending => "Pending",

        HomeHeadline => "Motor claims, reported in minutes",
        HomeIntro => "Report a vehicle incident anywhere in the GCC and follow its progress online.",
        HomeNewClaimBody => "Start a new First Notice of Loss for your vehicle.",
        HomeTrackBody => "Check the status of a claim you already submitted.",
        SupportedCountries => "Supported countries",

        NotFoundTitle => "Page not found",
        NotFoundBody => "The page you are looking for does not exist.",
    }
}

fn ar(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "إخطار حوادث المركبات - الخليج",
        AppSubtitle => "الإخطار الأول بالخسارة",
        Loading => "جارٍ التحميل...",
        Language => "اللغة",
        ServerOnline => "متصل",
        ServerOffline => "غير متصل",
        DemoMode => "وضع تجريبي",

        NavHome => "الرئيسية",
        NavNewClaim => "الإبلاغ عن مطالبة",
        NavTrackClaim => "تتبع المطالبة",

        StepContact => "بيانات الاتصال",
        StepVehicle => "المركبة",
        StepIncident => "الحادث",
        StepAttachments => "المرفقات",
        StepReview => "المراجعة",
        HintContact => "أدخل بيانات الاتصال لتلقي تحديثات المطالبة",
        HintVehicle => "أدخل بيانات المركبة والتأمين",
        HintIncident => "صف الحادث وظروفه",
        HintAttachments => "أضف روابط الصور ومقاطع الفيديو والمستندات",
        HintReview => "راجع جميع البيانات قبل الإرسال",
        StepProgress => "الخطوة {0} من {1}",
        Back => "السابق",
        Next => "التالي",
        Submit => "إرسال المطالبة",
        SubmitFailed => "حدث خطأ أثناء إرسال المطالبة",
        Dismiss => "إغلاق",

        Country => "الدولة",
        MobileNumber => "رقم الجوال",
        NationalId => "رقم الهوية",
        ReporterName => "الاسم الكامل",
        ReporterEmail => "البريد الإلكتروني",

        PlateNumber => "رقم اللوحة",
        PlateCountry => "دولة اللوحة",
        VehicleType => "نوع المركبة",
        VehicleMake => "الشركة المصنعة",
        VehicleModel => "الطراز",
        VehicleYear => "سنة الصنع",
        VehicleColor => "اللون",
        PolicyNumber => "رقم الوثيقة",
        CoverageType => "نوع التغطية",
        IsFleet => "مركبة ضمن أسطول",

        IncidentDate => "تاريخ الحادث",
        IncidentTime => "وقت الحادث",
        IncidentLocation => "الموقع",
        Latitude => "خط العرض",
        Longitude => "خط الطول",
        Description => "الوصف",
        IsDrivable => "المركبة صالحة للقيادة",
        HasInjuries => "توجد إصابات",
        ThirdPartyInvolved => "طرف ثالث متورط",
        PoliceReportNumber => "رقم تقرير الشرطة",

        AttachmentsTitle => "المرفقات",
        NoAttachments => "لم تتم إضافة مرفقات بعد",
        AddAttachment => "إضافة مرفق",
        RemoveAttachment => "حذف",
        AttachmentUrl => "رابط الملف",
        AttachmentType => "النوع",
        AttachmentDescription => "ملاحظة",

        ReviewTitle => "راجع مطالبتك",
        Yes => "نعم",
        No => "لا",

        ValidationRequired => "هذا الحقل مطلوب",
        ValidationInvalidEmail => "البريد الإلكتروني غير صالح",
        ValidationInvalidFormat => "صيغة غير صالحة",
        ValidationTooLong => "القيمة طويلة جدًا",
        ValidationOutOfRange => "يجب أن تكون القيمة بين {0} و{1}",

        SuccessTitle => "تم إرسال المطالبة",
        SuccessMessage => "تم استلام مطالبتك وهي قيد المعالجة.",
        SuccessFnolId => "الرقم المرجعي للإخطار",
        SuccessTrackLink => "تتبع هذه المطالبة",
        Copy => "نسخ",
        Copied => "تم النسخ",

        TrackingTitle => "تتبع مطالبتك",
        TrackingSubtitle => "أدخل الرقم المرجعي للإخطار لمعرفة حالة المطالبة",
        TrackingEnterFnolId => "الرقم المرجعي، مثل FNOL-UAE-2025-000001",
        TrackingSearch => "بحث",
        TrackingNotFound => "لم يتم العثور على الإخطار",
        TrackingReference => "مرجع المطالبة",
        TrackingProgress => "تقدم المطالبة",
        TrackingStatus => "الحالة",
        TrackingSeverity => "الخطورة",
        TrackingRoute => "مسار المعالجة",
        TrackingSubmitted => "تاريخ الإرسال",
        TrackingLastUpdated => "آخر تحديث",

        StatusSubmitted => "مُرسلة",
        StatusInProgress => "قيد المعالجة",
        StatusCompleted => "مكتملة",
        StatusRejected => "مرفوضة",
        Unknown => "غير معروف",
        SeverityHigh => "أولوية عالية",
        SeverityMedium => "أولوية متوسطة",
        SeverityLow => "أولوية منخفضة",
        RouteComplex => "مراجعة معقدة",
        RouteStandard => "معالجة قياسية",
        RouteFastTrack => "مسار سريع",
        RoutePending => "قيد الانتظار",

        HomeHeadline => "أبلغ عن حادث مركبتك في دقائق",
        HomeIntro => "أبلغ عن حادث مركبة في أي دولة خليجية وتابع تقدم المطالبة عبر الإنترنت.",
        HomeNewClaimBody => "ابدأ إخطارًا أوليًا جديدًا بالخسارة لمركبتك.",
        HomeTrackBody => "تحقق من حالة مطالبة قمت بإرسالها.",
        SupportedCountries => "الدول المدعومة",

        NotFoundTitle => "الصفحة غير موجودة",
        NotFoundBody => "الصفحة التي تبحث عنها غير موجودة.",
    }
}

fn hi(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        Loading => "लोड हो रहा है...",
        Language => "भाषा",
        NavHome => "होम",
        NavNewClaim => "नया दावा",
        NavTrackClaim => "दावा ट्रैक करें",
        StepContact => "संपर्क",
        StepVehicle => "वाहन",
        StepIncident => "घटना",
        StepAttachments => "संलग्नक",
        StepReview => "समीक्षा",
        Back => "पीछे",
        Next => "आगे",
        Submit => "दावा जमा करें",
        _ => return None,
    })
}

fn ur(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        Loading => "لوڈ ہو رہا ہے...",
        Language => "زبان",
        NavHome => "ہوم",
        NavNewClaim => "نیا دعویٰ",
        NavTrackClaim => "دعویٰ ٹریک کریں",
        StepContact => "رابطہ",
        StepVehicle => "گاڑی",
        StepIncident => "واقعہ",
        StepAttachments => "منسلکات",
        StepReview => "جائزہ",
        Back => "پیچھے",
        Next => "آگے",
        Submit => "دعویٰ جمع کریں",
        _ => return None,
    })
}

fn ml(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        Loading => "ലോഡ് ചെയ്യുന്നു...",
        Language => "ഭാഷ",
        NavHome => "ഹോം",
        NavNewClaim => "പുതിയ ക്ലെയിം",
        NavTrackClaim => "ക്ലെയിം ട്രാക്ക് ചെയ്യുക",
        StepContact => "ബന്ധപ്പെടാനുള്ള വിവരങ്ങൾ",
        StepVehicle => "വാഹനം",
        StepIncident => "സംഭവം",
        StepAttachments => "അറ്റാച്ച്മെന്റുകൾ",
        StepReview => "അവലോകനം",
        Back => "പിന്നോട്ട്",
        Next => "അടുത്തത്",
        Submit => "ക്ലെയിം സമർപ്പിക്കുക",
        _ => return None,
    })
}

fn tl(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        Loading => "Naglo-load...",
        Language => "Wika",
        NavHome => "Home",
        NavNewClaim => "Mag-ulat ng Claim",
        NavTrackClaim => "Subaybayan ang Claim",
        StepContact => "Contact",
        StepVehicle => "Sasakyan",
        StepIncident => "Insidente",
        StepAttachments => "Mga Attachment",
        StepReview => "Suriin",
        Back => "Bumalik",
        Next => "Susunod",
        Submit => "Isumite ang Claim",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [TextKey; 6] = [
        TextKey::NavHome,
        TextKey::StepReview,
        TextKey::ValidationRequired,
        TextKey::RoutePending,
        TextKey::StepProgress,
        TextKey::NotFoundBody,
    ];

    #[test]
    fn test_no_key_resolves_to_empty_text() {
        for language in LanguageCode::all() {
            for key in SAMPLE {
                assert!(!translate(language, key).is_empty(), "{:?}/{:?}", language, key);
            }
        }
    }

    #[test]
    fn test_partial_languages_fall_back_to_english() {
        assert_eq!(translate(LanguageCode::Hi, TextKey::NavHome), "होम");
        assert_eq!(
            translate(LanguageCode::Hi, TextKey::ValidationRequired),
            translate(LanguageCode::En, TextKey::ValidationRequired)
        );
        assert_eq!(
            translate(LanguageCode::Tl, TextKey::TrackingNotFound),
            "FNOL not found"
        );
    }

    #[test]
    fn test_arabic_is_translated() {
        assert_eq!(translate(LanguageCode::Ar, TextKey::Next), "التالي");
        assert_ne!(
            translate(LanguageCode::Ar, TextKey::SubmitFailed),
            translate(LanguageCode::En, TextKey::SubmitFailed)
        );
    }

    #[test]
    fn test_fill() {
        let text = fill(translate(LanguageCode::En, TextKey::StepProgress), &["2", "5"]);
        assert_eq!(text, "Step 2 of 5");
        assert_eq!(fill("no placeholders", &["x"]), "no placeholders");
    }
}
