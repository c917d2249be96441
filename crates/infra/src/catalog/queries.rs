// crates/infra/src/catalog/queries.rs
//! Read-only SQL against the Lightroom catalog schema.

pub const CAMERAS: &str = "SELECT id_local, value FROM AgInternedExifCameraModel ORDER BY value";

pub const LENSES: &str = "SELECT id_local, value FROM AgInternedExifLens ORDER BY value";

/// Columns are read by position in `photo_record`.
pub const PHOTOS: &str = "
SELECT    image.id_local,
          image.id_global,
          rootFolder.absolutePath || folder.pathFromRoot || rootFile.baseName || '.' || rootFile.extension AS fullName,
          coalesce(lens.value, 'Unknown'),
          coalesce(camera.value, 'Unknown'),
          image.fileFormat,
          image.fileHeight,
          image.fileWidth,
          image.orientation,
          image.captureTime,
          image.rating,
          image.colorLabels,
          image.pick,
          exif.dateDay,
          exif.dateMonth,
          exif.dateYear,
          exif.flashFired,
          exif.isoSpeedRating,
          exif.shutterSpeed,
          exif.focalLength,
          exif.aperture,
          exif.hasGPS,
          exif.gpsLatitude,
          exif.gpsLongitude,
          iptc.caption,
          iptc.copyright,
          coalesce(creator.value, 'Unknown')
FROM      Adobe_images               image
JOIN      AgLibraryFile              rootFile    ON    rootFile.id_local = image.rootFile
JOIN      AgLibraryFolder            folder      ON      folder.id_local = rootFile.folder
JOIN      AgLibraryRootFolder        rootFolder  ON  rootFolder.id_local = folder.rootFolder
LEFT JOIN AgLibraryIPTC              iptc        ON       image.id_local = iptc.image
LEFT JOIN AgHarvestedExifMetadata    exif        ON       image.id_local = exif.image
LEFT JOIN AgInternedExifLens         lens        ON        lens.id_local = exif.lensRef
LEFT JOIN AgInternedExifCameraModel  camera      ON      camera.id_local = exif.cameraModelRef
LEFT JOIN AgInternedIptcCreator      creator     ON     creator.id_local = iptc.image
ORDER BY  fullName
";

pub const PHOTOS_BY_DATE: &str = "
SELECT   0,
         date(captureTime),
         count(*)
FROM     Adobe_images
GROUP BY date(captureTime)
ORDER BY date(captureTime)
";

pub const CAMERA_DISTRIBUTION: &str = "
SELECT    cam.id_local,
          cam.value,
          count(cam.value) AS photos
FROM      Adobe_images               image
JOIN      AgHarvestedExifMetadata    exif  ON  image.id_local = exif.image
LEFT JOIN AgInternedExifCameraModel  cam   ON    cam.id_local = exif.cameraModelRef
WHERE     cam.id_local IS NOT NULL
GROUP BY  cam.id_local
ORDER BY  photos DESC, cam.value
";

pub const LENS_DISTRIBUTION: &str = "
SELECT    lens.id_local,
          lens.value,
          count(lens.value) AS photos
FROM      Adobe_images               image
JOIN      AgHarvestedExifMetadata    exif  ON  image.id_local = exif.image
LEFT JOIN AgInternedExifLens         lens  ON   lens.id_local = exif.lensRef
WHERE     lens.id_local IS NOT NULL
GROUP BY  lens.id_local
ORDER BY  photos DESC, lens.value
";

pub const FOCAL_LENGTH_DISTRIBUTION: &str = "
SELECT   min(id_local),
         focalLength,
         count(id_local) AS photos
FROM     AgHarvestedExifMetadata
WHERE    focalLength IS NOT NULL
GROUP BY focalLength
ORDER BY photos DESC, focalLength
";

/// Raw APEX aperture values; labels are computed after the query.
pub const APERTURE_DISTRIBUTION: &str = "
SELECT   aperture,
         count(aperture)
FROM     AgHarvestedExifMetadata
WHERE    aperture IS NOT NULL
GROUP BY aperture
ORDER BY aperture
";

/// Raw APEX shutter speeds; labels are computed after the query.
pub const EXPOSURE_TIME_DISTRIBUTION: &str = "
SELECT   shutterSpeed,
         count(shutterSpeed)
FROM     AgHarvestedExifMetadata
WHERE    shutterSpeed IS NOT NULL
GROUP BY shutterSpeed
ORDER BY shutterSpeed
";

pub const EDIT_COUNT_DISTRIBUTION: &str = "
SELECT   0,
         steps,
         count(*)
FROM (
    SELECT    image.id_local         AS id,
              count(step.id_local)   AS steps
    FROM      Adobe_images                          image
    LEFT JOIN Adobe_libraryImageDevelopHistoryStep  step  ON  step.image = image.id_local
    GROUP BY  image.id_local
)
GROUP BY steps
ORDER BY steps
";

pub const KEYWORD_DISTRIBUTION: &str = "
SELECT   keyword.id_local,
         keyword.name,
         count(*) AS photos
FROM     AgLibraryKeywordImage  link
JOIN     AgLibraryKeyword       keyword  ON  keyword.id_local = link.tag
WHERE    keyword.name IS NOT NULL
GROUP BY keyword.id_local
ORDER BY photos DESC, keyword.name
";

/// Columns: count, camera, lens, aperture (APEX), focal length, shutter speed (APEX).
pub const SUNBURST: &str = "
SELECT    count(*),
          cam.value,
          lens.value,
          exif.aperture,
          exif.focalLength,
          exif.shutterSpeed
FROM      Adobe_images               image
JOIN      AgHarvestedExifMetadata    exif  ON  image.id_local = exif.image
LEFT JOIN AgInternedExifLens         lens  ON   lens.id_local = exif.lensRef
LEFT JOIN AgInternedExifCameraModel  cam   ON    cam.id_local = exif.cameraModelRef
WHERE     cam.value IS NOT NULL AND lens.value IS NOT NULL
GROUP BY  cam.value, lens.value, exif.aperture, exif.focalLength, exif.shutterSpeed
ORDER BY  cam.value, lens.value, exif.aperture, exif.focalLength, count(*)
";

/// RAW originals that carry a JPG sidecar.
pub const SIDECARS: &str = "
SELECT      image.id_local,
            root.absolutePath,
            folder.pathFromRoot,
            file.baseName,
            file.extension,
            file.sidecarExtensions
FROM        AgLibraryFile        file
INNER JOIN  Adobe_images         image   ON  file.id_local = image.rootFile
INNER JOIN  AgLibraryFolder      folder  ON  file.folder = folder.id_local
INNER JOIN  AgLibraryRootFolder  root    ON  folder.rootFolder = root.id_local
WHERE       file.sidecarExtensions = 'JPG'
AND         image.fileFormat = 'RAW'
ORDER BY    image.id_local
";

/// Cheap check that fails unless the file is an SQLite database.
pub const SCHEMA_CHECK: &str = "SELECT count(*) FROM sqlite_master";
